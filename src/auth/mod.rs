mod claims;
mod ids;
mod jwt;
mod password;

pub use claims::TokenPayload;
pub use ids::{IdGenerator, UuidGenerator};
pub use jwt::{JwtKeys, TokenService};
pub use password::{Argon2Hasher, PasswordHasher};
