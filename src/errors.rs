//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_minicanvas_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum MiniCanvasError {
            $($variant(String),)*
        }

        impl MiniCanvasError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(MiniCanvasError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MiniCanvasError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(MiniCanvasError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl MiniCanvasError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MiniCanvasError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_minicanvas_errors! {
    InvalidArgument("E001", "Invalid Argument"),
    Storage("E002", "Storage Error"),
    Configuration("E003", "Configuration Error"),
}

impl MiniCanvasError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MiniCanvasError::InvalidArgument(_))
    }
}

impl fmt::Display for MiniCanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MiniCanvasError {}

impl<T> From<std::sync::PoisonError<T>> for MiniCanvasError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        MiniCanvasError::Storage(format!("registry lock poisoned: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, MiniCanvasError>;
