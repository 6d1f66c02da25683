use serde::Serialize;

/// Derived state of an active departure, recomputed on every read.
/// Never stored as ground truth.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Status {
    OnTime,
    Soon,
    Overdue,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::OnTime => "on time",
            Status::Soon => "due soon",
            Status::Overdue => "OVERDUE",
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, Status::Overdue)
    }
}
