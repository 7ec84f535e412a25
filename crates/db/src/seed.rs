//! Sample content for fresh installations.

use sqlx::PgPool;
use virasat_core::content::{ProjectStatus, PropertyType};
use virasat_core::json_list::JsonList;

use crate::models::project::ProjectInput;
use crate::repositories::ProjectRepo;

fn sample_projects() -> Vec<ProjectInput> {
    vec![
        ProjectInput {
            title: Some("Virasat Heights".into()),
            description: Some(
                "Luxury apartments with modern amenities in the heart of the city".into(),
            ),
            location: Some("Downtown, Mumbai".into()),
            status: Some(ProjectStatus::UnderConstruction),
            price: Some("₹85 Lakhs onwards".into()),
            property_type: Some(PropertyType::Apartment),
            bedrooms: Some("2-3 BHK".into()),
            area: Some("1200-1800 sq ft".into()),
            image: Some("/placeholder.svg?height=300&width=400&text=Virasat+Heights".into()),
            features: JsonList::new(
                ["Swimming Pool", "Gym", "Garden", "Parking"]
                    .map(String::from)
                    .to_vec(),
            ),
            rating: Some(4.5),
            completion_date: Some("Dec 2025".into()),
        },
        ProjectInput {
            title: Some("Virasat Gardens".into()),
            description: Some(
                "Premium villas surrounded by lush greenery and modern facilities".into(),
            ),
            location: Some("Suburbs, Pune".into()),
            status: Some(ProjectStatus::ReadyToMove),
            price: Some("₹1.2 Crores onwards".into()),
            property_type: Some(PropertyType::Villa),
            bedrooms: Some("3-4 BHK".into()),
            area: Some("2500-3500 sq ft".into()),
            image: Some("/placeholder.svg?height=300&width=400&text=Virasat+Gardens".into()),
            features: JsonList::new(
                ["Private Garden", "Club House", "Security", "24/7 Water"]
                    .map(String::from)
                    .to_vec(),
            ),
            rating: Some(4.8),
            completion_date: Some("Ready".into()),
        },
    ]
}

/// Insert the sample projects when the `projects` table is empty.
///
/// Returns the number of rows inserted (0 when content already exists).
pub async fn seed_sample_projects(pool: &PgPool) -> Result<usize, sqlx::Error> {
    if ProjectRepo::count(pool).await? > 0 {
        return Ok(0);
    }

    let samples = sample_projects();
    for project in &samples {
        let id = ProjectRepo::create(pool, project).await?;
        tracing::debug!(id, title = ?project.title, "Seeded sample project");
    }
    Ok(samples.len())
}
