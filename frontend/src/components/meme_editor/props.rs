//! Defines the properties for the `MemeEditorComponent`.
//!
//! Both properties are optional; when omitted the editor falls back to the
//! values in `crate::config`.

use yew::prelude::*;

/// Properties for the `MemeEditorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct MemeEditorProps {
    /// Image shown until the user requests a random template.
    ///
    /// Read once in `create`; later changes do not replace the active image.
    #[prop_or_default]
    pub initial_image: Option<AttrValue>,

    /// Endpoint listing the templates, fetched on the first render only.
    #[prop_or_default]
    pub templates_url: Option<AttrValue>,
}
