/// Storage key holding the serialized `{posts, notifications}` mirror
pub const FEED_STORAGE_KEY: &str = "socialsphere_v1";

/// Storage key holding the current display name
pub const USER_NAME_KEY: &str = "ss_user_name";

/// Storage key holding the theme preference (`"dark"` / `"light"`)
pub const THEME_KEY: &str = "ss_theme";

/// Storage key of the flag suppressing the one-time landing dialog
pub const WELCOME_DISMISSED_KEY: &str = "ss_welcome_dismissed";

/// Maximum number of notifications kept, newest first
pub const NOTIFICATION_CAP: usize = 50;

/// Notifications previewed in the header dropdown
pub const NOTIFICATION_DROPDOWN_LIMIT: usize = 6;

/// Soft limit on post length enforced by the composer only
pub const MAX_POST_CHARS: usize = 300;

/// Entries shown in the explore view's trending and suggested lists
pub const EXPLORE_LIMIT: usize = 6;

/// Defaults for a user who has not edited their profile
pub const DEFAULT_DISPLAY_NAME: &str = "You";
pub const DEFAULT_AVATAR: &str = "assets/avatar-default.png";
pub const DEFAULT_BIO: &str = "Front-end developer • Portfolio";

/// Accounts offered in the "who to follow" panel
pub const SUGGESTED_USERS: [&str; 5] = ["Amina", "Liam", "Sofia", "Noah", "Zara"];
