use chrono::Utc;
use shared_types::{
    Catalog, CreateLeadRequest, DashboardMetrics, Lead, LeadError, LeadFilter, LeadStatus, Screen,
};

use crate::filter;
use crate::metrics;
use crate::navigator::Navigator;
use crate::store::LeadStore;

/// Application state container: owns the lead store, the navigator, and the
/// catalog, and is the only mutation path offered to the presentation layer.
///
/// Derived views (filtered lists, metrics, insights) are recomputed from the
/// current snapshot on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct AppState {
    store: LeadStore,
    navigator: Navigator,
    catalog: Catalog,
    submit_in_flight: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            store: LeadStore::new(),
            navigator: Navigator::new(),
            catalog,
            submit_in_flight: false,
        }
    }

    /// Starts with the demo leads, like the shipped app does on first run.
    pub fn with_sample_leads(catalog: Catalog) -> Self {
        AppState {
            store: LeadStore::with_sample_leads(),
            navigator: Navigator::new(),
            catalog,
            submit_in_flight: false,
        }
    }

    pub fn leads(&self) -> &[Lead] {
        self.store.all()
    }

    pub fn lead(&self, id: &str) -> Option<&Lead> {
        self.store.get(id)
    }

    pub fn filtered_leads(&self, filter: &LeadFilter) -> Vec<Lead> {
        filter::filter_leads(self.store.all(), filter)
    }

    /// Distinct assignees of the current snapshot, for the filter dropdown.
    pub fn assignees(&self) -> Vec<String> {
        filter::assignees(self.store.all())
    }

    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        metrics::aggregate(self.store.all(), &self.catalog.sales_team)
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.navigator
            .selected_lead_id()
            .and_then(|id| self.store.get(id))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight
    }

    /// Opens the details screen for an existing lead.
    pub fn view_lead(&mut self, id: &str) -> Result<(), LeadError> {
        if self.store.get(id).is_none() {
            return Err(LeadError::NotFound(id.to_string()));
        }
        self.navigator.view_lead(id.to_string());
        Ok(())
    }

    pub fn back(&mut self) {
        self.navigator.back();
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.navigator.navigate(screen);
    }

    /// Marks a submission as in flight. Returns false when one is already
    /// running, in which case the caller must not submit again.
    pub fn begin_submit(&mut self) -> bool {
        if self.submit_in_flight {
            return false;
        }
        self.submit_in_flight = true;
        true
    }

    /// Adds the lead and, on success, returns to the listing. The in-flight
    /// flag is cleared either way.
    pub fn submit_lead(&mut self, request: CreateLeadRequest) -> Result<Lead, LeadError> {
        let result = self.store.add(request);
        self.submit_in_flight = false;
        if result.is_ok() {
            self.navigator.navigate(Screen::Listing);
        }
        result
    }

    /// Abandons the add form and returns to the listing.
    pub fn cancel_add(&mut self) {
        self.submit_in_flight = false;
        self.navigator.navigate(Screen::Listing);
    }

    pub fn update_lead(&mut self, lead: Lead) -> Result<(), LeadError> {
        self.store.update(lead)
    }

    /// Changes a lead's status and stamps `last_contacted` with today,
    /// since a status change implies a fresh contact.
    pub fn change_status(&mut self, id: &str, status: LeadStatus) -> Result<(), LeadError> {
        let mut lead = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| LeadError::NotFound(id.to_string()))?;
        tracing::info!("Lead {} status {} -> {}", id, lead.status, status);
        lead.status = status;
        lead.last_contacted = Utc::now().date_naive();
        self.store.update(lead)
    }

    /// Reassigns a lead. Not a contact, so `last_contacted` is untouched.
    pub fn change_assignee(&mut self, id: &str, assignee: String) -> Result<(), LeadError> {
        let mut lead = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| LeadError::NotFound(id.to_string()))?;
        tracing::info!("Lead {} assigned to {}", id, assignee);
        lead.assigned_to = assignee;
        self.store.update(lead)
    }

    /// Replaces a lead's notes and stamps `last_contacted` with today.
    pub fn save_notes(&mut self, id: &str, notes: String) -> Result<(), LeadError> {
        let mut lead = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| LeadError::NotFound(id.to_string()))?;
        lead.notes = notes;
        lead.last_contacted = Utc::now().date_naive();
        self.store.update(lead)
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::{IntentLevel, LeadScore, Platform};

    fn sample_state() -> AppState {
        AppState::with_sample_leads(Catalog::default())
    }

    fn valid_request() -> CreateLeadRequest {
        CreateLeadRequest {
            name: "Kiran Rao".to_string(),
            phone: "+91 91234 56789".to_string(),
            platform: Some(Platform::Website),
            assigned_to: "Amit Sharma".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_state_is_empty_on_listing() {
        let state = AppState::new(Catalog::default());
        assert!(state.leads().is_empty());
        assert_eq!(state.screen(), Screen::Listing);
        assert!(state.selected_lead().is_none());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_sample_state_carries_demo_leads() {
        let state = sample_state();
        assert_eq!(state.leads().len(), 5);
        assert_eq!(state.catalog().sales_team[0], "Priya Singh");
    }

    #[test]
    fn test_view_lead_selects_and_opens_details() {
        let mut state = sample_state();
        state.view_lead("3").unwrap();

        assert_eq!(state.screen(), Screen::Details);
        assert_eq!(state.selected_lead().unwrap().name, "Suresh Patel");
    }

    #[test]
    fn test_view_lead_rejects_unknown_id() {
        let mut state = sample_state();
        match state.view_lead("missing") {
            Err(LeadError::NotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(state.screen(), Screen::Listing);
    }

    #[test]
    fn test_back_clears_selection() {
        let mut state = sample_state();
        state.view_lead("1").unwrap();
        state.back();

        assert_eq!(state.screen(), Screen::Listing);
        assert!(state.selected_lead().is_none());
    }

    #[test]
    fn test_submit_lead_returns_to_listing() {
        let mut state = sample_state();
        state.navigate(Screen::Management);
        assert!(state.begin_submit());

        let lead = state.submit_lead(valid_request()).unwrap();
        assert_eq!(lead.name, "Kiran Rao");
        assert_eq!(state.screen(), Screen::Listing);
        assert!(!state.is_submitting());
        assert_eq!(state.leads()[0].name, "Kiran Rao");
    }

    #[test]
    fn test_begin_submit_blocks_reentry() {
        let mut state = sample_state();
        assert!(state.begin_submit());
        assert!(!state.begin_submit());

        state.submit_lead(valid_request()).unwrap();
        assert!(state.begin_submit());
    }

    #[test]
    fn test_failed_submit_stays_on_management() {
        let mut state = sample_state();
        state.navigate(Screen::Management);
        assert!(state.begin_submit());

        match state.submit_lead(CreateLeadRequest::default()) {
            Err(LeadError::MissingField(field)) => assert_eq!(field, "name"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
        assert_eq!(state.screen(), Screen::Management);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_cancel_add_clears_flag() {
        let mut state = sample_state();
        state.navigate(Screen::Management);
        assert!(state.begin_submit());
        state.cancel_add();

        assert_eq!(state.screen(), Screen::Listing);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_change_status_stamps_contact_date() {
        let mut state = sample_state();
        state.change_status("2", LeadStatus::Qualified).unwrap();

        let lead = state.lead("2").unwrap();
        assert_eq!(lead.status, LeadStatus::Qualified);
        assert_eq!(lead.last_contacted, Utc::now().date_naive());
        // Scores are fixed at creation and survive later edits
        assert_eq!(lead.score, LeadScore::Warm);
        assert_eq!(lead.intent, IntentLevel::Medium);
    }

    #[test]
    fn test_change_assignee_keeps_contact_date() {
        let mut state = sample_state();
        state
            .change_assignee("1", "Amit Sharma".to_string())
            .unwrap();

        let lead = state.lead("1").unwrap();
        assert_eq!(lead.assigned_to, "Amit Sharma");
        assert_eq!(
            lead.last_contacted,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_save_notes_stamps_contact_date() {
        let mut state = sample_state();
        state
            .save_notes("5", "Reconsidering after price drop".to_string())
            .unwrap();

        let lead = state.lead("5").unwrap();
        assert_eq!(lead.notes, "Reconsidering after price drop");
        assert_eq!(lead.last_contacted, Utc::now().date_naive());
    }

    #[test]
    fn test_metrics_follow_mutations() {
        let mut state = sample_state();
        assert_eq!(state.dashboard_metrics().qualified_leads, 1);
        assert_eq!(state.dashboard_metrics().conversion_rate, 20);

        state.change_status("2", LeadStatus::Qualified).unwrap();
        let metrics = state.dashboard_metrics();
        assert_eq!(metrics.qualified_leads, 2);
        assert_eq!(metrics.conversion_rate, 40);
    }

    #[test]
    fn test_filtered_leads_apply_query() {
        let state = sample_state();
        let filter = LeadFilter {
            status: Some(LeadStatus::Qualified),
            ..Default::default()
        };

        let matched = state.filtered_leads(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Deepika Rao");
    }

    #[test]
    fn test_assignees_come_from_snapshot() {
        let state = sample_state();
        assert_eq!(
            state.assignees(),
            vec!["Priya Singh".to_string(), "Vikash Kumar".to_string()]
        );
    }
}
