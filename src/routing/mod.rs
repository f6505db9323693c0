//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, base URL)
//!     → router.rs (normalize method/path, default route fallback)
//!     → resolver.rs (alias substitution, candidate selection)
//!     → token.rs (split request path on '/')
//!     → matcher.rs (match path tokens against route tokens)
//!     → Return: ResolutionResult (Matched | MethodNotAllowed | NotFound)
//!
//! Route Compilation (at startup or reload):
//!     RouteConfig[] + AliasConfig[]
//!     → route.rs (tokenize pattern once into Literal/Parameter tokens)
//!     → container.rs (keep registration order, index aliases)
//!     → Freeze as immutable Router
//!     → shared.rs (atomic swap for concurrent readers)
//! ```
//!
//! # Design Decisions
//! - Route definitions are immutable once registered; a match pairs a
//!   shared definition with its own bound arguments
//! - Registration order is priority among equally specific candidates
//! - Fewer bound arguments wins over more (static beats parameterized)
//! - Absence of a match is a result, never an error

pub mod container;
pub mod matcher;
pub mod resolver;
pub mod result;
pub mod route;
pub mod router;
pub mod shared;
pub mod token;

pub use container::{AliasTable, RouteContainer, RouteSet};
pub use matcher::{match_tokens, Arguments};
pub use resolver::Resolver;
pub use result::{BoundRoute, ResolutionResult};
pub use route::{Alias, RouteDefinition};
pub use router::Router;
pub use shared::SharedRouter;
pub use token::Token;
