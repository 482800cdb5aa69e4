use std::fmt;

/// Login credentials for the Hypon cloud API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Tenant/vendor identifier, usually empty
    pub oem: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            oem: String::new(),
        }
    }

    pub fn with_oem(mut self, oem: impl Into<String>) -> Self {
        self.oem = oem.into();
        self
    }

    /// Form fields for the login request, in wire order
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("oem", self.oem.as_str()),
        ]
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("oem", &self.oem)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_order() {
        let creds = Credentials::new("alice", "s3cret").with_oem("acme");
        assert_eq!(
            creds.form_fields(),
            [("username", "alice"), ("password", "s3cret"), ("oem", "acme")]
        );
    }

    #[test]
    fn test_oem_defaults_to_empty() {
        let creds = Credentials::new("alice", "s3cret");
        assert_eq!(creds.oem, "");
        assert_eq!(creds.form_fields()[2], ("oem", ""));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("alice", "s3cret");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_is_complete() {
        assert!(Credentials::new("alice", "s3cret").is_complete());
        assert!(!Credentials::new("alice", "").is_complete());
        assert!(!Credentials::default().is_complete());
    }
}
