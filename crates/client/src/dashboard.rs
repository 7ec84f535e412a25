//! The admin dashboard's combined view of all editable content.

use serde_json::Value;
use virasat_core::resource::Resource;

use crate::client::ApiClient;
use crate::error::ClientError;

/// Every row of the five admin-managed resources, fetched together.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub projects: Vec<Value>,
    pub news: Vec<Value>,
    pub blogs: Vec<Value>,
    pub careers: Vec<Value>,
    pub team: Vec<Value>,
}

/// Row counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_news: usize,
    pub total_blogs: usize,
    pub total_careers: usize,
    pub total_team: usize,
}

impl DashboardSnapshot {
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_projects: self.projects.len(),
            total_news: self.news.len(),
            total_blogs: self.blogs.len(),
            total_careers: self.careers.len(),
            total_team: self.team.len(),
        }
    }
}

impl ApiClient {
    /// Fetch the five lists concurrently. The first failure fails the whole
    /// snapshot; the other requests are dropped.
    pub async fn dashboard(&self) -> Result<DashboardSnapshot, ClientError> {
        let (projects, news, blogs, careers, team) = tokio::try_join!(
            self.list::<Value>(Resource::Projects),
            self.list::<Value>(Resource::News),
            self.list::<Value>(Resource::Blogs),
            self.list::<Value>(Resource::Careers),
            self.list::<Value>(Resource::Team),
        )?;

        tracing::debug!(
            projects = projects.len(),
            news = news.len(),
            blogs = blogs.len(),
            careers = careers.len(),
            team = team.len(),
            "Dashboard loaded"
        );

        Ok(DashboardSnapshot {
            projects,
            news,
            blogs,
            careers,
            team,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn stats_count_each_list() {
        let snapshot = DashboardSnapshot {
            projects: vec![json!({"id": 1}), json!({"id": 2})],
            careers: vec![json!({"id": 3})],
            ..Default::default()
        };

        assert_eq!(
            snapshot.stats(),
            DashboardStats {
                total_projects: 2,
                total_careers: 1,
                ..Default::default()
            }
        );
    }
}
