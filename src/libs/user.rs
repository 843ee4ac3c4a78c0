/// Stub account record. No task workflow reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: &str, password: &str) -> Self {
        NewUser {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl User {
    pub fn from_new(id: i64, new_user: &NewUser) -> Self {
        User {
            id,
            username: new_user.username.clone(),
            password: new_user.password.clone(),
        }
    }
}
