//! User roles and the capabilities each one is granted.

/// Account role as stored on the profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Staff,
    Admin,
}

impl Role {
    /// Exact match on the stored value; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Customer" => Some(Role::Customer),
            "Staff" => Some(Role::Staff),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }
}

/// Protected areas of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    CustomerDashboard,
    CustomerEvents,
    ManageOwnBookings,
    StaffDashboard,
    AdminDashboard,
}

impl Capability {
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Capability::CustomerDashboard
            | Capability::CustomerEvents
            | Capability::ManageOwnBookings => &[Role::Customer],
            Capability::StaffDashboard => &[Role::Staff],
            Capability::AdminDashboard => &[Role::Admin],
        }
    }

    pub fn allows(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}
