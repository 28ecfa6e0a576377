use strum::{Display, IntoStaticStr};

/// Content types the builder fills in when the caller did not set one.
#[derive(IntoStaticStr, Debug, PartialEq, Eq, Hash, Clone, Copy, Display)]
pub enum MediaType {
    #[strum(serialize = "text/plain;charset=UTF-8")]
    TextPlain,
    #[strum(serialize = "application/json")]
    Json,
    #[strum(serialize = "application/x-www-form-urlencoded;charset=UTF-8")]
    FormUrlEncoded,
    #[strum(serialize = "multipart/form-data")]
    FormData,
    #[strum(serialize = "application/octet-stream")]
    OctetStream,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
