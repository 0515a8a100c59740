//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, so signatures across
//! repositories, validation and serialization stay readable.

/// Type alias for scientist database model.
///
/// # Fields (from `entity::scientist::Model`)
/// - `id` - Primary key
/// - `name` - Unique scientist name
/// - `field_of_study` - Scientist's discipline
/// - `avatar` - Optional image reference
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last modification
pub type ScientistModel = entity::scientist::Model;

/// Type alias for planet database model.
///
/// # Fields (from `entity::planet::Model`)
/// - `id` - Primary key
/// - `name`, `distance_from_earth`, `nearest_star`, `image` - Optional descriptive fields
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last modification
pub type PlanetModel = entity::planet::Model;

/// Type alias for mission database model.
///
/// Missions join scientists to planets.
///
/// # Fields (from `entity::mission::Model`)
/// - `id` - Primary key
/// - `name` - Mission name
/// - `scientist_id` - Foreign key to the scientist flying the mission
/// - `planet_id` - Foreign key to the destination planet
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last modification
pub type MissionModel = entity::mission::Model;
