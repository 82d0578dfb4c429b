use std::fmt;

/// HTTP method used by an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Every backend route the browser controller talks to.
///
/// The paths are the contract with the server; forms reference endpoints by
/// variant, never by literal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Signup,
    Donate,
    EventDonate,
    RequestFood,
    FeedAnimals,
    Feedback,
    Contact,
    DashboardStats,
    RecentDonations,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/api/login",
            Endpoint::Signup => "/api/signup",
            Endpoint::Donate => "/api/donate",
            Endpoint::EventDonate => "/api/event-donate",
            Endpoint::RequestFood => "/api/request-food",
            Endpoint::FeedAnimals => "/api/feed-animals",
            Endpoint::Feedback => "/api/feedback",
            Endpoint::Contact => "/api/contact",
            Endpoint::DashboardStats => "/api/dashboard-stats",
            Endpoint::RecentDonations => "/api/recent-donations",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::DashboardStats | Endpoint::RecentDonations => Method::Get,
            _ => Method::Post,
        }
    }

    /// Whether a successful call changes the numbers shown on the dashboard.
    pub fn affects_dashboard(self) -> bool {
        matches!(
            self,
            Endpoint::Donate | Endpoint::EventDonate | Endpoint::RequestFood
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
