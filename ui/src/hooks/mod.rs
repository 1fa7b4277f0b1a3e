pub mod use_api;
pub mod use_authentication;
pub mod use_logout;
pub mod use_paginated_list;
pub mod use_push_route;
pub mod use_title;

pub use use_api::{ApiError, UseApiHandle, use_api};
pub use use_authentication::use_authentication;
pub use use_logout::use_logout;
pub use use_paginated_list::{PaginatedList, use_paginated_list};
pub use use_push_route::use_push_route;
pub use use_title::use_title;
