pub const EPHEMERAL_KEY_SIZE: usize = 32;

pub const LOGIN_SALT_SIZE: usize = 32;

pub const IDENTITY_DIGEST_SIZE: usize = 32;

pub const TOKEN_TTL_SECS: i64 = 3600;
