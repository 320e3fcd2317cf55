/// Identity of the user making the request. Guests have user id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub user_id: u64,
}

impl Session {
    pub fn new(user_id: u64) -> Self {
        Self { user_id }
    }

    pub fn guest() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.user_id > 0
    }
}
