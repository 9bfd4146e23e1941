#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use farm_core::access::Role;
use farm_core::availability::DateKey;
use farm_core::booking::BookingRecord;
use farm_core::session::{Profile, ProfileDirectory};

/// Test helper: booking record with a date and a status.
pub fn rec(date: &str, status: &str) -> BookingRecord {
    BookingRecord::new(date, status)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn key(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::from_naive(day(y, m, d))
}

pub fn profile(id: &str, auth_id: Option<&str>, role: Role) -> Profile {
    Profile {
        id: id.to_string(),
        auth_id: auth_id.map(str::to_string),
        fullname: format!("{id} name"),
        email: Some(format!("{id}@farm.test")),
        role: Some(role),
        contact: "09170000000".to_string(),
        username: None,
    }
}

/// In-memory profile tables keyed by auth id.
#[derive(Default)]
pub struct Directory {
    pub customers: HashMap<String, Profile>,
    pub admins: HashMap<String, Profile>,
    pub staff: HashMap<String, Profile>,
}

impl ProfileDirectory for Directory {
    fn find_customer(&self, auth_id: &str) -> Option<Profile> {
        self.customers.get(auth_id).cloned()
    }

    fn find_admin(&self, auth_id: &str) -> Option<Profile> {
        self.admins.get(auth_id).cloned()
    }

    fn find_staff(&self, auth_id: &str) -> Option<Profile> {
        self.staff.get(auth_id).cloned()
    }
}
