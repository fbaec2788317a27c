//! The navigation path table.
//!
//! Paths are the application's only external protocol: one is accepted
//! on the command line as the start view, and the address prompt feeds
//! typed paths through the same parser. Every path selects exactly one
//! view; anything else is a typed parse error, so an undefined "no
//! view" state is unrepresentable at runtime.
//!
//! | Path             | Route                |
//! |------------------|----------------------|
//! | `/anecdotes`     | [`Route::Anecdotes`] |
//! | `/anecdotes/:id` | [`Route::Anecdote`]  |
//! | `/create`        | [`Route::Create`]    |
//! | `/about`         | [`Route::About`]     |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::AnecdoteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The anecdote list.
    Anecdotes,
    /// One anecdote by id. The id is taken from the path verbatim; it
    /// may not resolve to anything, which the detail view renders as an
    /// explicit not-found state.
    Anecdote(AnecdoteId),
    /// The create form.
    Create,
    /// The static about page.
    About,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteParseError {
    #[error("no view is routed at '{0}'")]
    NoMatch(String),
    #[error("'{0}' is not an anecdote id")]
    BadId(String),
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            "/anecdotes" => return Ok(Route::Anecdotes),
            "/create" => return Ok(Route::Create),
            "/about" => return Ok(Route::About),
            _ => {}
        }

        // `/anecdotes/:id` takes exactly one non-empty trailing segment.
        if let Some(rest) = path.strip_prefix("/anecdotes/") {
            if rest.is_empty() || rest.contains('/') {
                return Err(RouteParseError::NoMatch(path.to_string()));
            }
            return rest
                .parse::<u64>()
                .map(|id| Route::Anecdote(AnecdoteId(id)))
                .map_err(|_| RouteParseError::BadId(rest.to_string()));
        }

        Err(RouteParseError::NoMatch(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Anecdotes => write!(f, "/anecdotes"),
            Route::Anecdote(id) => write!(f, "/anecdotes/{id}"),
            Route::Create => write!(f, "/create"),
            Route::About => write!(f, "/about"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_parse() {
        assert_eq!("/anecdotes".parse(), Ok(Route::Anecdotes));
        assert_eq!("/create".parse(), Ok(Route::Create));
        assert_eq!("/about".parse(), Ok(Route::About));
    }

    #[test]
    fn detail_path_carries_the_id() {
        assert_eq!("/anecdotes/2".parse(), Ok(Route::Anecdote(AnecdoteId(2))));
        assert_eq!(
            "/anecdotes/9001".parse(),
            Ok(Route::Anecdote(AnecdoteId(9001)))
        );
    }

    #[test]
    fn non_numeric_id_is_a_bad_id() {
        assert_eq!(
            "/anecdotes/knuth".parse::<Route>(),
            Err(RouteParseError::BadId("knuth".to_string()))
        );
        assert_eq!(
            "/anecdotes/-1".parse::<Route>(),
            Err(RouteParseError::BadId("-1".to_string()))
        );
    }

    #[test]
    fn unmatched_paths_do_not_route() {
        for path in ["", "/", "/anecdote", "/anecdotes/", "/anecdotes/1/votes", "/settings"] {
            assert_eq!(
                path.parse::<Route>(),
                Err(RouteParseError::NoMatch(path.to_string())),
                "path {path:?} must not match a route"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for route in [
            Route::Anecdotes,
            Route::Anecdote(AnecdoteId(42)),
            Route::Create,
            Route::About,
        ] {
            assert_eq!(route.to_string().parse(), Ok(route));
        }
    }
}
