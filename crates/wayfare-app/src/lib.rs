// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod draft;
pub mod escape;
pub mod format;
pub mod ids;
pub mod markup;
pub mod model;
pub mod picker;
pub mod state;
pub mod view;

pub use draft::*;
pub use escape::*;
pub use format::*;
pub use ids::*;
pub use markup::*;
pub use model::*;
pub use picker::*;
pub use state::*;
pub use view::*;
