// Resume record lifecycle: validation, JSON API handlers, and the HTML list
// page with its form routes.

pub mod handlers;
pub mod validation;
pub mod views;
