use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { embed_url: String },
}

impl ViewerState {
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// The modal surface that shows a detail's embed.
pub trait EmbedViewer {
    fn set_source(&self, url: &str) -> Result<()>;

    /// Read from the surface itself; the host page may close it at any time.
    fn state(&self) -> ViewerState;

    fn show(&self) -> Result<()>;
}

/// Points the viewer at `embed_url` and shows it. An already open viewer
/// only has its source swapped. Returns the state after the transition.
pub fn open_detail<V: EmbedViewer + ?Sized>(viewer: &V, embed_url: &str) -> Result<ViewerState> {
    let was_open = viewer.state().is_open();
    viewer.set_source(embed_url)?;

    if was_open {
        tracing::debug!(%embed_url, "viewer already open, replacing embed");
    } else {
        tracing::debug!(%embed_url, "opening detail viewer");
        viewer.show()?;
    }

    Ok(viewer.state())
}
