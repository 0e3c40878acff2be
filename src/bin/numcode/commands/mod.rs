/// `decode` subcommand.
pub mod decode;
/// `encode` subcommand.
pub mod encode;
/// `info` subcommand.
pub mod info;
