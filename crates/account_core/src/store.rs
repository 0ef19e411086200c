use shared::domain::UserRecord;

#[derive(Debug, Clone, Default)]
pub struct UserStore {
    // Insertion order is the list order; duplicate emails are allowed.
    users: Vec<UserRecord>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    pub fn add_user(&mut self, record: UserRecord) {
        self.users.push(record);
    }

    pub fn list_users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Replaces the first record whose email matches. Returns whether one did.
    pub fn update_user(&mut self, email: &str, record: UserRecord) -> bool {
        match self.users.iter_mut().find(|user| user.email == email) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// First record matching both fields exactly; no trimming, no case folding.
    pub fn find_match(&self, email: &str, password: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|user| user.email == email && user.password == password)
    }

    /// Renames the first (email, password) match and returns the updated record.
    pub fn rename_match(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Option<UserRecord> {
        let slot = self
            .users
            .iter_mut()
            .find(|user| user.email == email && user.password == password)?;
        slot.name = name.to_owned();
        Some(slot.clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

pub fn demo_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Ada Lovelace", "analytical-engine", "ada@example.com"),
        UserRecord::new("Grace Hopper", "nanoseconds", "grace@example.com"),
        UserRecord::new("Alan Turing", "bombe1940", "alan@example.com"),
    ]
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
