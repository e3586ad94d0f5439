// Browser-side names and style values.

// Global object a page can define to override `SnowConfig` defaults
pub const CONFIG_GLOBAL: &str = "snowConfig";

// CSS visibility values toggled on the overlay container
pub const VISIBILITY_VISIBLE: &str = "visible";
pub const VISIBILITY_HIDDEN: &str = "hidden";

// Element tags used for flakes
pub const VECTOR_TAG: &str = "object"; // lets us reach into the loaded svg document
pub const RASTER_TAG: &str = "img";
