use bevy::prelude::*;

/// Raw catalog input, before sorting and normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceObject {
    pub name:        String,
    pub size_meters: f64,
    pub color:       Option<Color>,
    pub luminosity:  Option<f32>,
    pub texture:     Option<String>,
}

impl ReferenceObject {
    pub fn new(name: impl Into<String>, size_meters: f64) -> Self {
        Self {
            name: name.into(),
            size_meters,
            color: None,
            luminosity: None,
            texture: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_luminosity(mut self, luminosity: f32) -> Self {
        self.luminosity = Some(luminosity);
        self
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }
}

/// Hue in turns (0..1) rather than degrees, saturation and lightness in 0..1.
fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    Color::hsl(hue * 360.0, saturation, lightness)
}

/// DNA to the observable universe. Listed roughly by size; the catalog sorts them.
pub fn reference_objects() -> Vec<ReferenceObject> {
    vec![
        ReferenceObject::new("DNA", 2e-9).with_color(hsl(0.3, 0.5, 0.8)),
        ReferenceObject::new("Red Blood Cell", 8e-6).with_color(hsl(0.0, 1.0, 0.6)),
        ReferenceObject::new("Skin Cell", 3e-5).with_color(hsl(0.1, 0.6, 0.6)),
        ReferenceObject::new("Salt Grain", 3e-4).with_color(hsl(0.0, 0.0, 0.95)),
        ReferenceObject::new("Grain of Sand", 1e-3).with_color(hsl(0.1, 0.4, 0.7)),
        ReferenceObject::new("US Penny", 1.9e-2).with_color(hsl(0.07, 0.8, 0.5)),
        ReferenceObject::new("Basketball", 2.4e-1).with_color(hsl(0.06, 1.0, 0.6)),
        ReferenceObject::new("Human", 1.7).with_color(hsl(0.1, 0.2, 0.05)),
        ReferenceObject::new("Blue Whale Length", 30.0).with_color(hsl(0.6, 0.4, 0.25)),
        ReferenceObject::new("Saturn V Rocket Height", 111.0).with_color(hsl(0.6, 0.05, 0.7)),
        ReferenceObject::new("Eiffel Tower Height", 330.0).with_color(hsl(0.1, 0.1, 0.4)),
        ReferenceObject::new("Central Park Width", 800.0).with_color(hsl(0.3, 0.5, 0.3)),
        ReferenceObject::new("Mount Everest Height", 8.8e3).with_color(hsl(0.6, 0.05, 0.6)),
        ReferenceObject::new("Neutron Star", 2e4)
            .with_color(hsl(0.5, 0.5, 0.5))
            .with_luminosity(0.7),
        ReferenceObject::new("Switzerland Width", 2.2e5).with_color(hsl(0.35, 0.4, 0.4)),
        ReferenceObject::new("Italy Length", 1.3e6).with_color(hsl(0.4, 0.3, 0.5)),
        ReferenceObject::new("Earth", 1.27e7).with_color(hsl(0.6, 0.8, 0.5)),
        ReferenceObject::new("Jupiter", 1.4e8).with_color(hsl(0.5, 0.8, 0.8)),
        ReferenceObject::new("Sun", 1.39e9)
            .with_color(hsl(0.1, 1.0, 0.7))
            .with_luminosity(0.5),
        ReferenceObject::new("Spica", 10e9)
            .with_color(hsl(0.6, 0.7, 0.7))
            .with_luminosity(0.7),
        ReferenceObject::new("Betelgeuse", 1e12)
            .with_color(hsl(0.0, 0.7, 0.7))
            .with_luminosity(0.7),
        ReferenceObject::new("Biggest Black Hole", 390e12)
            .with_color(hsl(0.0, 0.0, 0.0))
            .with_luminosity(1.0),
        ReferenceObject::new("Ant Nebula", 1.892e16)
            .with_color(hsl(0.6, 0.2, 0.3))
            .with_luminosity(0.5),
        ReferenceObject::new("Orion Nebula", 2.270_575e17)
            .with_color(hsl(0.9, 0.8, 0.4))
            .with_luminosity(0.6),
        ReferenceObject::new("Milky Way Galaxy", 9.460_73e20)
            .with_color(hsl(0.0, 0.0, 1.0))
            .with_luminosity(0.6)
            .with_texture("milky-way.png"),
        ReferenceObject::new("Virgo Cluster", 1.419_11e23).with_color(hsl(0.0, 0.0, 0.2)),
        ReferenceObject::new("Laniakea Supercluster", 4.919_58e24)
            .with_color(hsl(0.1, 0.5, 0.2))
            .with_luminosity(0.5),
        ReferenceObject::new("Observable Universe", 8.798_48e26)
            .with_color(hsl(0.0, 1.0, 1.0))
            .with_luminosity(0.5)
            .with_texture("universe.png"),
    ]
}
