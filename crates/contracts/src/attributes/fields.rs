//! The fixed registry of numeric product attributes.

/// One numeric product attribute rendered as an input control.
///
/// The discriminant doubles as the index into per-field arrays,
/// so the enum order is the registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Weight,
    Width,
    Length,
    Depth,
    Height,
    StorageSize,
    ScreenSize,
    CameraPixel,
}

impl Field {
    pub const COUNT: usize = 8;

    /// All fields in registry order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Weight,
        Field::Width,
        Field::Length,
        Field::Depth,
        Field::Height,
        Field::StorageSize,
        Field::ScreenSize,
        Field::CameraPixel,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire identifier, also used for the input `name` and the
    /// `<key>_input` visibility container class.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Weight => "weight",
            Field::Width => "width",
            Field::Length => "length",
            Field::Depth => "depth",
            Field::Height => "height",
            Field::StorageSize => "storage_size",
            Field::ScreenSize => "screen_size",
            Field::CameraPixel => "camera_pixel",
        }
    }

    /// Human-readable label for form labels and outlier messages.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Weight => "Weight",
            Field::Width => "Width",
            Field::Length => "Length",
            Field::Depth => "Depth",
            Field::Height => "Height",
            Field::StorageSize => "Storage Size",
            Field::ScreenSize => "Screen Size",
            Field::CameraPixel => "Camera Pixel",
        }
    }

    /// Resolve a field key as it appears in a validation response.
    ///
    /// The endpoint reports the camera pixel attribute under the key it
    /// was modeled with (`camera_pixel_max`), which differs from the
    /// request parameter name, so both spellings resolve here.
    pub fn from_key(key: &str) -> Option<Field> {
        match key {
            "weight" => Some(Field::Weight),
            "width" => Some(Field::Width),
            "length" => Some(Field::Length),
            "depth" => Some(Field::Depth),
            "height" => Some(Field::Height),
            "storage_size" => Some(Field::StorageSize),
            "screen_size" => Some(Field::ScreenSize),
            "camera_pixel" | "camera_pixel_max" => Some(Field::CameraPixel),
            _ => None,
        }
    }
}
