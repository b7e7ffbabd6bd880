// Composition root of the pipeline board service.
//
// Responsibilities
// - Read config from environment.
// - Pick the deals gateway (hosted backend or in memory) and mount the board.
// - Expose the board over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
