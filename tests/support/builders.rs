// tests/support/builders.rs
use storyhub_core::application::commands::stories::CreateStoryCommand;
use storyhub_core::domain::user::{Role, User, UserId, Username};

use super::mocks::fixed_now;

pub struct UserBuilder {
    id: i64,
    username: Option<String>,
    first_name: Option<String>,
    role: Role,
    is_active: bool,
}

impl UserBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: Some(format!("user{id}")),
            first_name: None,
            role: Role::Writer,
            is_active: true,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn without_username(mut self) -> Self {
        self.username = None;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn admin(mut self) -> Self {
        self.role = Role::Admin;
        self
    }

    pub fn reader(mut self) -> Self {
        self.role = Role::Reader;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: self.username.map(|u| Username::new(u).unwrap()),
            first_name: self.first_name,
            role: self.role,
            is_active: self.is_active,
            created_at: fixed_now(),
        }
    }
}

pub fn story_command(title: &str) -> CreateStoryCommand {
    CreateStoryCommand::builder()
        .title(title)
        .content(format!("Body of {title}"))
        .build()
        .unwrap()
}
