//! Catalogue of the API's content resources.
//!
//! Both the server (for paths and response messages) and the client (for
//! endpoint construction) work from this table, so the two cannot drift.

use std::fmt;

/// One REST resource exposed under `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Projects,
    News,
    Blogs,
    Careers,
    Team,
    Contact,
    Settings,
}

/// Static response messages for a CRUD resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub missing_required: &'static str,
    pub missing_id: &'static str,
    pub not_found: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

pub const PROJECTS: Messages = Messages {
    missing_required: "Missing required field: title",
    missing_id: "Missing project ID",
    not_found: "Project not found",
    created: "Project added successfully",
    updated: "Project updated successfully",
    deleted: "Project deleted successfully",
};

pub const NEWS: Messages = Messages {
    missing_required: "Missing required field: title",
    missing_id: "Missing news ID",
    not_found: "News article not found",
    created: "News article added successfully",
    updated: "News article updated successfully",
    deleted: "News article deleted successfully",
};

pub const BLOGS: Messages = Messages {
    missing_required: "Missing required field: title",
    missing_id: "Missing blog ID",
    not_found: "Blog post not found",
    created: "Blog post added successfully",
    updated: "Blog post updated successfully",
    deleted: "Blog post deleted successfully",
};

pub const CAREERS: Messages = Messages {
    missing_required: "Missing required field: title",
    missing_id: "Missing career ID",
    not_found: "Job opening not found",
    created: "Job opening added successfully",
    updated: "Job opening updated successfully",
    deleted: "Job opening deleted successfully",
};

pub const TEAM: Messages = Messages {
    missing_required: "Missing required field: name",
    missing_id: "Missing team member ID",
    not_found: "Team member not found",
    created: "Team member added successfully",
    updated: "Team member updated successfully",
    deleted: "Team member deleted successfully",
};

pub const CONTACT: Messages = Messages {
    missing_required: "Missing required fields: name and email",
    missing_id: "Missing submission ID",
    not_found: "Contact submission not found",
    created: "Contact submission received successfully",
    updated: "Contact submission updated successfully",
    deleted: "Contact submission deleted successfully",
};

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Projects,
        Resource::News,
        Resource::Blogs,
        Resource::Careers,
        Resource::Team,
        Resource::Contact,
        Resource::Settings,
    ];

    /// Path segment below `/api`, e.g. `"projects"`.
    pub fn segment(self) -> &'static str {
        match self {
            Resource::Projects => "projects",
            Resource::News => "news",
            Resource::Blogs => "blogs",
            Resource::Careers => "careers",
            Resource::Team => "team",
            Resource::Contact => "contact",
            Resource::Settings => "settings",
        }
    }

    /// Absolute API path, e.g. `"/api/projects"`.
    pub fn path(self) -> String {
        format!("/api/{}", self.segment())
    }

    /// CRUD response messages. Settings is a key/value map, not a row
    /// collection, and has none.
    pub fn messages(self) -> Option<&'static Messages> {
        match self {
            Resource::Projects => Some(&PROJECTS),
            Resource::News => Some(&NEWS),
            Resource::Blogs => Some(&BLOGS),
            Resource::Careers => Some(&CAREERS),
            Resource::Team => Some(&TEAM),
            Resource::Contact => Some(&CONTACT),
            Resource::Settings => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}
