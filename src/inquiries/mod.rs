use std::sync::Mutex;
use uuid::Uuid;

use crate::models::inquiries::{CreateInquiry, Inquiry};

/// Process-lifetime record of inquiries sent to photographers.
///
/// There is no persistence anywhere in this service; the book is an in-memory
/// list behind a mutex and dies with the process.
#[derive(Default)]
pub struct InquiryBook {
    entries: Mutex<Vec<Inquiry>>,
}

impl InquiryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inquiry and return the stored copy.
    pub fn submit(&self, photographer_id: u64, input: CreateInquiry) -> Inquiry {
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            photographer_id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            event_date: input.event_date,
            message: input.message,
            created_at: chrono::Utc::now(),
        };
        self.lock().push(inquiry.clone());
        inquiry
    }

    /// Inquiries recorded for one photographer, oldest first.
    pub fn for_photographer(&self, photographer_id: u64) -> Vec<Inquiry> {
        self.lock()
            .iter()
            .filter(|i| i.photographer_id == photographer_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Inquiry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
