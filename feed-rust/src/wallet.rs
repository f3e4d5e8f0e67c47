use rand::Rng;

/// Suffix that marks an address as an admin in demo deployments.
const DEMO_ADMIN_SUFFIX: &str = "a1b2c3";

/// The connected wallet, if any. The address is an opaque voter identity;
/// nothing here verifies that the caller controls it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    address: Option<String>,
}

impl WalletSession {
    #[must_use]
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// A session connected as `address`. A blank address stays disconnected.
    #[must_use]
    pub fn connected(address: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.connect(address);
        session
    }

    pub fn connect(&mut self, address: impl Into<String>) {
        let address = address.into();
        self.address = if address.trim().is_empty() {
            None
        } else {
            Some(address)
        };
    }

    /// Connect as a freshly generated `0x` address.
    pub fn connect_random(&mut self) -> &str {
        let bytes: [u8; 20] = rand::thread_rng().gen();
        let address = bytes
            .iter()
            .fold(String::from("0x"), |mut acc, byte| {
                acc.push_str(&format!("{byte:02x}"));
                acc
            });
        self.address.insert(address)
    }

    pub fn disconnect(&mut self) {
        self.address = None;
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    #[must_use]
    pub fn voter_id(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Whether the current user sees moderation tools. A client-side flag, not
/// an authorization check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserRole {
    is_admin: bool,
}

impl UserRole {
    #[must_use]
    pub fn member() -> Self {
        Self { is_admin: false }
    }

    #[must_use]
    pub fn admin() -> Self {
        Self { is_admin: true }
    }

    /// Demo rule: addresses ending in `a1b2c3` are admins.
    #[must_use]
    pub fn for_address(address: &str) -> Self {
        Self {
            is_admin: address.to_lowercase().ends_with(DEMO_ADMIN_SUFFIX),
        }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        self.is_admin
    }

    pub fn toggle_admin(&mut self) {
        self.is_admin = !self.is_admin;
    }
}
