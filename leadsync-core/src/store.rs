use chrono::Utc;
use shared_types::{CreateLeadRequest, Lead, LeadError};

use crate::samples;
use crate::scoring;

/// Owns the authoritative collection of leads.
///
/// Newest leads sit at the front. All mutation goes through the methods
/// here, so every read observes a consistent snapshot.
#[derive(Debug, Clone)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self { leads: Vec::new() }
    }

    /// Store preloaded with the demo dataset.
    pub fn with_sample_leads() -> Self {
        Self {
            leads: samples::sample_leads(),
        }
    }

    /// Create a lead from form input and prepend it to the collection.
    ///
    /// Assigns the id and both dates, and derives the score and intent
    /// from the submitted fields. Name, phone, platform and assignee
    /// are required.
    pub fn add(&mut self, request: CreateLeadRequest) -> Result<Lead, LeadError> {
        if request.name.is_empty() {
            return Err(LeadError::MissingField("name"));
        }
        if request.phone.is_empty() {
            return Err(LeadError::MissingField("phone"));
        }
        let platform = request.platform.ok_or(LeadError::MissingField("platform"))?;
        if request.assigned_to.is_empty() {
            return Err(LeadError::MissingField("assigned_to"));
        }

        let score = scoring::score_for(&request.notes, &request.timeline);
        let intent = scoring::intent_for(&request.budget, &request.model);
        let today = Utc::now().date_naive();

        let lead = Lead {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            platform,
            status: request.status,
            assigned_to: request.assigned_to,
            last_contacted: today,
            date_received: today,
            budget: request.budget,
            model: request.model,
            timeline: request.timeline,
            notes: request.notes,
            score,
            intent,
        };

        tracing::info!("Adding lead {} ({})", lead.name, lead.id);
        self.leads.insert(0, lead.clone());

        Ok(lead)
    }

    /// Replace the stored record whose id matches the given lead.
    pub fn update(&mut self, lead: Lead) -> Result<(), LeadError> {
        match self.leads.iter_mut().find(|l| l.id == lead.id) {
            Some(existing) => {
                *existing = lead;
                Ok(())
            }
            None => Err(LeadError::NotFound(lead.id)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    /// Read-only view of the collection, newest first.
    pub fn all(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

impl Default for LeadStore {
    fn default() -> Self {
        Self::new()
    }
}
