use uuid::Uuid;

/// Per-call context handed down from the transports to the service.
///
/// Cancellation follows the request future: when a transport drops it, the
/// pending repository call is dropped with it.
#[derive(Debug, Clone)]
pub struct Context {
    request_id: Uuid,
}

impl Context {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
