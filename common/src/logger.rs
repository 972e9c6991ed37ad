use chrono::Local;
use std::sync::OnceLock;

static LOGGER_READY: OnceLock<()> = OnceLock::new();

pub fn init_logger() {
    LOGGER_READY.get_or_init(|| ());
}

pub fn log(file: &str, line: u32, message: &str) {
    if LOGGER_READY.get().is_none() {
        eprintln!("Logger not initialized! Call init_logger() first.");
        return;
    }
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    println!("[{}][{}:{}] {}", timestamp, file_name, line, message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
