use clap::Parser;

#[derive(Parser)]
pub struct AppConfig {
    //Bot Token
    #[clap(env)]
    pub teloxide_token: String,

    /// Base host of the banking platform API.
    #[clap(env)]
    pub api_base_url: String,

    #[clap(env)]
    pub redis_url: String,

    #[clap(env, default_value_t = 3000)]
    pub health_port: u16,
}
