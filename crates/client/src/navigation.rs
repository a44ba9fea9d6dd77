use api_shared::ContentRes;

/// Where a screen asks the front-end to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Open the viewer on the record(s) with this exact title.
    DetailByTitle(String),
    /// Open the viewer on a record the caller already holds.
    Detail(ContentRes),
}
