use anyhow::Result;
use clap::{Parser, Subcommand};
use navi_bridge::{AppConfig, BackendBridge, LocalFile, MaterialUploadRequest, logger};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "navi", about = "Navi 后端桥接命令行工具")]
struct Cli {
    /// 配置文件路径，默认读取当前目录下的 config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 检查后端是否在线
    Status,
    /// 上传课程资料
    Upload {
        #[arg(long)]
        file: PathBuf,
        /// 上传时使用的文件名，默认取路径中的文件名
        #[arg(long)]
        name: Option<String>,
        /// MIME 类型，默认按扩展名推断
        #[arg(long)]
        mime: Option<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        professor: String,
    },
    /// 向 AI 导师提问
    Chat {
        #[arg(short, long)]
        question: String,
        #[arg(short, long)]
        subject: Option<String>,
    },
    /// 校园导航
    Campus {
        #[arg(short, long)]
        question: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_config = AppConfig::load(cli.config.as_deref())?;
    logger::init(&app_config.log_level);

    debug!("使用配置: {:?}", app_config);
    info!("🔌 后端地址: {}", app_config.bridge.api_base_url);

    let bridge = BackendBridge::new(app_config.bridge)?;

    match cli.command {
        Command::Status => print_json(&bridge.check_status().await)?,
        Command::Upload {
            file,
            name,
            mime,
            subject,
            professor,
        } => {
            let guessed = LocalFile::from_path(&file);
            let local_file = LocalFile::path_ref(
                file.to_string_lossy(),
                name.unwrap_or_else(|| guessed.name().to_string()),
                mime.unwrap_or_else(|| guessed.mime_type().to_string()),
            );
            let request = MaterialUploadRequest::new(local_file, subject, professor);
            print_json(&bridge.upload_course_material(request).await)?;
        }
        Command::Chat { question, subject } => {
            print_json(&bridge.chat_with_ai(&question, subject.as_deref()).await)?
        }
        Command::Campus { question } => print_json(&bridge.ask_campus_navigator(&question).await)?,
    }

    Ok(())
}
