use crate::catalog::{
    filter_positions, Catalog, Enrichment, FilterOptions, InterviewRecord, Query, Stats,
};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Search,
    Company,
    Role,
    Results,
}

impl FocusPane {
    fn next(self) -> Self {
        match self {
            FocusPane::Search => FocusPane::Company,
            FocusPane::Company => FocusPane::Role,
            FocusPane::Role => FocusPane::Results,
            FocusPane::Results => FocusPane::Search,
        }
    }

    fn previous(self) -> Self {
        match self {
            FocusPane::Search => FocusPane::Results,
            FocusPane::Company => FocusPane::Search,
            FocusPane::Role => FocusPane::Company,
            FocusPane::Results => FocusPane::Role,
        }
    }
}

/// Controller owning the catalog, the filter controls, and the derived view.
///
/// The controls (`search_input`, `company_filter`, `role_filter`) hold what
/// the user has entered; `query` is what was last applied. The visible list
/// only changes when filters are applied or cleared.
pub struct App {
    pub catalog: Catalog,
    pub options: FilterOptions,
    pub search_input: String,
    /// Selected company, empty for "all".
    pub company_filter: String,
    /// Selected role, empty for "all".
    pub role_filter: String,
    pub query: Query,
    visible: Vec<usize>,
    pub selected_index: usize,
    pub focus: FocusPane,
    pub show_raw: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let options = FilterOptions::from_records(&catalog);
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            options,
            search_input: String::new(),
            company_filter: String::new(),
            role_filter: String::new(),
            query: Query::default(),
            visible,
            selected_index: 0,
            focus: FocusPane::Search,
            show_raw: false,
            should_quit: false,
            theme,
        }
    }

    /// Fill the controls from `query` and apply it.
    pub fn set_query(&mut self, query: &Query) {
        self.search_input.clone_from(&query.search);
        self.company_filter.clone_from(&query.company);
        self.role_filter.clone_from(&query.role);
        self.apply_filters();
    }

    /// Recompute the visible list from the current controls.
    pub fn apply_filters(&mut self) {
        self.query = Query::new(
            self.search_input.clone(),
            self.company_filter.clone(),
            self.role_filter.clone(),
        );
        self.visible = filter_positions(&self.catalog, &self.query);
        self.selected_index = 0;
        tracing::debug!(
            query = ?self.query,
            matches = self.visible.len(),
            "filters applied"
        );
    }

    /// Reset every control and show the whole catalog again.
    pub fn clear(&mut self) {
        self.search_input.clear();
        self.company_filter.clear();
        self.role_filter.clear();
        self.apply_filters();
    }

    pub fn visible_records(&self) -> Vec<&InterviewRecord> {
        let records = self.catalog.records();
        self.visible.iter().map(|&i| &records[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn stats(&self) -> Stats {
        Stats::from_records(self.visible_records())
    }

    pub fn selected_record(&self) -> Option<&InterviewRecord> {
        self.visible
            .get(self.selected_index)
            .map(|&i| &self.catalog.records()[i])
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search_input.push(c);
    }

    pub fn search_pop_char(&mut self) {
        self.search_input.pop();
    }

    pub fn next_company(&mut self) {
        self.company_filter = cycle(&self.options.companies, &self.company_filter, true);
        self.apply_filters();
    }

    pub fn previous_company(&mut self) {
        self.company_filter = cycle(&self.options.companies, &self.company_filter, false);
        self.apply_filters();
    }

    pub fn next_role(&mut self) {
        self.role_filter = cycle(&self.options.roles, &self.role_filter, true);
        self.apply_filters();
    }

    pub fn previous_role(&mut self) {
        self.role_filter = cycle(&self.options.roles, &self.role_filter, false);
        self.apply_filters();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn toggle_focus_back(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn toggle_raw(&mut self) {
        self.show_raw = !self.show_raw;
    }

    pub fn next(&mut self) {
        let count = self.visible.len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.visible.len();
        if count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = count - 1;
            }
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
    }

    /// Merge a fetched resource into its record. Unknown ids are ignored.
    pub fn apply_enrichment(&mut self, enrichment: Enrichment) -> bool {
        let attached = self
            .catalog
            .attach_raw_content(&enrichment.record_id, enrichment.raw);
        if !attached {
            tracing::debug!(record = %enrichment.record_id, "enrichment for unknown record");
        }
        attached
    }
}

/// Step through `[all, options...]` starting from `current`.
///
/// A value that is not among the options (e.g. given on the command line)
/// counts as "all".
fn cycle(options: &[String], current: &str, forward: bool) -> String {
    let len = options.len() + 1;
    let pos = options
        .iter()
        .position(|o| o == current)
        .map_or(0, |p| p + 1);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}
