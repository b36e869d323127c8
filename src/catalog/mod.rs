mod constants;
mod label_entry;
mod reference_objects;

use bevy::prelude::*;
use thiserror::Error;

use constants::FALLBACK_COLOR_LIGHTNESS;
use constants::FALLBACK_COLOR_SATURATION;
pub use label_entry::LabelEntry;
use label_entry::display_size_and_scale;
pub use reference_objects::ReferenceObject;
use reference_objects::reference_objects;

use crate::distance::LIGHT_YEAR_THRESHOLD_METERS;
use crate::distance::format_distance;

/// Builds the scale catalog once at startup and inserts it as a resource.
///
/// If the objects fail validation the error is logged and no catalog is inserted; everything that
/// depends on it is gated on `resource_exists::<ScaleCatalog>`.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        match ScaleCatalog::reference() {
            Ok(catalog) => {
                info!(
                    "scale catalog: {} entries from {} ({}) to {} ({})",
                    catalog.len(),
                    catalog.first().name,
                    catalog.first().distance_label,
                    catalog.last().name,
                    catalog.last().distance_label,
                );
                for entry in catalog.entries() {
                    debug!("  {}: {}", entry.name, entry.distance_label);
                }
                app.insert_resource(catalog);
            },
            Err(e) => error!("scale catalog rejected: {e}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,
    #[error("{name}: size must be finite and positive, got {size_meters}")]
    InvalidSize { name: String, size_meters: f64 },
    #[error("{name}: luminosity must be within 0..=1, got {luminosity}")]
    InvalidLuminosity { name: String, luminosity: f32 },
}

/// Reference objects sorted ascending by physical size. Never empty, never re-sorted.
#[derive(Resource, Debug, Clone)]
pub struct ScaleCatalog {
    entries: Vec<LabelEntry>,
}

impl ScaleCatalog {
    pub fn build(mut objects: Vec<ReferenceObject>) -> Result<Self, CatalogError> {
        if objects.is_empty() {
            return Err(CatalogError::Empty);
        }
        for object in &objects {
            validate(object)?;
        }

        objects.sort_by(|a, b| a.size_meters.total_cmp(&b.size_meters));

        let entries = objects.into_iter().map(into_label_entry).collect();
        Ok(Self { entries })
    }

    /// The built-in journey from DNA to the observable universe.
    pub fn reference() -> Result<Self, CatalogError> { Self::build(reference_objects()) }

    pub fn entries(&self) -> &[LabelEntry] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    /// Smallest entry. `build` rejects empty catalogs, so there always is one.
    pub fn first(&self) -> &LabelEntry { &self.entries[0] }

    /// Largest entry.
    pub fn last(&self) -> &LabelEntry { &self.entries[self.entries.len() - 1] }
}

fn validate(object: &ReferenceObject) -> Result<(), CatalogError> {
    if !object.size_meters.is_finite() || object.size_meters <= 0.0 {
        return Err(CatalogError::InvalidSize {
            name:        object.name.clone(),
            size_meters: object.size_meters,
        });
    }
    if let Some(luminosity) = object.luminosity
        && !(0.0..=1.0).contains(&luminosity)
    {
        return Err(CatalogError::InvalidLuminosity {
            name: object.name.clone(),
            luminosity,
        });
    }
    Ok(())
}

fn into_label_entry(object: ReferenceObject) -> LabelEntry {
    let (display_size, display_scale) = display_size_and_scale(object.size_meters);

    LabelEntry {
        distance_label: format_distance(object.size_meters, LIGHT_YEAR_THRESHOLD_METERS),
        color: object.color.unwrap_or_else(random_color),
        luminosity: object.luminosity.unwrap_or(0.0),
        name: object.name,
        actual_size_meters: object.size_meters,
        display_size,
        display_scale,
        texture: object.texture,
    }
}

fn random_color() -> Color {
    Color::hsl(
        rand::random::<f32>() * 360.0,
        FALLBACK_COLOR_SATURATION,
        FALLBACK_COLOR_LIGHTNESS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::constants::MIN_TEXT_SIZE;

    fn reference() -> ScaleCatalog {
        ScaleCatalog::reference().unwrap_or_else(|e| panic!("reference catalog invalid: {e}"))
    }

    #[test]
    fn test_reference_catalog_is_sorted_ascending() {
        let catalog = reference();
        assert_eq!(catalog.len(), 28);
        for pair in catalog.entries().windows(2) {
            assert!(
                pair[0].actual_size_meters <= pair[1].actual_size_meters,
                "{} sorts after {}",
                pair[0].name,
                pair[1].name
            );
        }
        assert_eq!(catalog.first().name, "DNA");
        assert_eq!(catalog.last().name, "Observable Universe");
    }

    #[test]
    fn test_build_sorts_unsorted_input() {
        let catalog = ScaleCatalog::build(vec![
            ReferenceObject::new("Earth", 1.27e7),
            ReferenceObject::new("DNA", 2e-9),
            ReferenceObject::new("Human", 1.7),
        ])
        .unwrap_or_else(|e| panic!("{e}"));

        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["DNA", "Human", "Earth"]);
    }

    #[test]
    fn test_display_pair_reconstructs_physical_size() {
        for entry in reference().entries() {
            let relative_error =
                ((entry.display_extent() - entry.actual_size_meters) / entry.actual_size_meters).abs();
            assert!(relative_error < 1e-12, "{} drifted by {relative_error}", entry.name);
            assert!(entry.display_size >= MIN_TEXT_SIZE, "{} laid out too small", entry.name);
            assert!(entry.display_scale > 0.0);
        }
    }

    #[test]
    fn test_distance_labels_use_both_tables() {
        let catalog = reference();
        let label = |name: &str| {
            catalog
                .entries()
                .iter()
                .find(|e| e.name == name)
                .map(|e| e.distance_label.clone())
                .unwrap_or_default()
        };

        assert_eq!(label("DNA"), "2 nanometers");
        assert_eq!(label("US Penny"), "1.9 centimeters");
        assert_eq!(label("Earth"), "12,700 kilometers");
        assert_eq!(label("Betelgeuse"), "1 billion kilometers");
        assert_eq!(label("Ant Nebula"), "2 light years");
        assert_eq!(label("Milky Way Galaxy"), "100 thousand light years");
        assert_eq!(label("Observable Universe"), "93 billion light years");
    }

    #[test]
    fn test_luminosity_defaults_to_zero() {
        let catalog = ScaleCatalog::build(vec![ReferenceObject::new("Human", 1.7)])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(!catalog.first().is_glowing());
        assert!(catalog.first().luminosity.abs() < f32::EPSILON);
    }

    #[test]
    fn test_textures_pass_through_unmodified() {
        let catalog = reference();
        let textures: Vec<&str> = catalog
            .entries()
            .iter()
            .filter_map(|e| e.texture.as_deref())
            .collect();
        assert_eq!(textures, ["milky-way.png", "universe.png"]);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(ScaleCatalog::build(Vec::new()).err(), Some(CatalogError::Empty));
        assert!(matches!(
            ScaleCatalog::build(vec![ReferenceObject::new("Nothing", 0.0)]),
            Err(CatalogError::InvalidSize { .. })
        ));
        assert!(matches!(
            ScaleCatalog::build(vec![ReferenceObject::new("Void", f64::NAN)]),
            Err(CatalogError::InvalidSize { .. })
        ));
        assert!(matches!(
            ScaleCatalog::build(vec![ReferenceObject::new("Nova", 1.0).with_luminosity(1.5)]),
            Err(CatalogError::InvalidLuminosity { .. })
        ));
    }

    #[test]
    fn test_plugin_inserts_catalog() {
        let mut app = App::new();
        app.add_plugins(CatalogPlugin);

        let catalog = app.world().get_resource::<ScaleCatalog>();
        assert_eq!(catalog.map(ScaleCatalog::len), Some(28));
        assert_eq!(catalog.map(|c| c.first().name.as_str()), Some("DNA"));
    }
}
