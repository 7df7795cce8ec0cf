pub mod colour_store;
pub mod picker;

pub use colour_store::{ColourStore, InMemoryStore, JsonFileStore};
pub use picker::{ColourPicker, ColourUpdate, Contrast, PaletteView, SliderStops};
