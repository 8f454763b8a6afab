use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::SignupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signup order, no duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Self {
        Self {
            description: description.to_owned(),
            schedule: schedule.to_owned(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Keeps activities in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityStore(IndexMap<String, Activity>);

impl ActivityStore {
    pub fn new<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self(activities.into_iter().collect())
    }

    pub fn get_all(&self) -> &IndexMap<String, Activity> {
        &self.0
    }

    pub fn exists(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends without checking membership, callers go through [`try_signup`].
    pub fn add_participant(&mut self, name: &str, email: &str) -> Result<(), SignupError> {
        let activity = self.0.get_mut(name).ok_or(SignupError::ActivityNotFound)?;
        activity.participants.push(email.to_owned());
        Ok(())
    }

    pub fn remove_participant(&mut self, name: &str, email: &str) -> Result<bool, SignupError> {
        let activity = self.0.get_mut(name).ok_or(SignupError::ActivityNotFound)?;
        match activity.participants.iter().position(|p| p == email) {
            Some(index) => {
                activity.participants.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub fn try_signup(store: &mut ActivityStore, name: &str, email: &str) -> Result<(), SignupError> {
    let activity = store.get(name).ok_or(SignupError::ActivityNotFound)?;
    if activity.is_signed_up(email) {
        return Err(SignupError::AlreadySignedUp);
    }
    store.add_participant(name, email)
}

pub fn try_unregister(store: &mut ActivityStore, name: &str, email: &str) -> Result<(), SignupError> {
    let activity = store.get(name).ok_or(SignupError::ActivityNotFound)?;
    if !activity.is_signed_up(email) {
        return Err(SignupError::NotSignedUp);
    }
    store.remove_participant(name, email)?;
    Ok(())
}
