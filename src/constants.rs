#[macro_export]
macro_rules! env_lazy {
    ($( $vis:vis $name:ident : $ty:ty = ($key:literal, $default:expr); )* ) => {
        $(
            $vis static $name: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| {
                $crate::libs::config::load_env();
                $crate::libs::config::Config::get_var_t::<$ty>($key, $default)
            });
        )*
    };
}

pub const DEFAULT_MOAC_RPC: &str = "http://127.0.0.1:8545";

env_lazy! {
    pub MOAC_RPC: String         = ("MOAC_RPC", DEFAULT_MOAC_RPC.to_string());
    pub MOAC_DEBUG: bool         = ("MOAC_DEBUG", false);
    pub MOAC_LOG_DIR: String     = ("MOAC_LOG_DIR", String::new());
    pub MOAC_TIMEOUT_SECS: u64   = ("MOAC_TIMEOUT_SECS", 30);
}
