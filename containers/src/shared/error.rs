#[macro_export]
macro_rules! require {
  ($cond:expr, $err:expr) => {
    if $cond {
        Ok(())
    } else {
        // Evaluate it once in case it's an expensive expression.
        let __err = $err;
        std::eprintln!("[{}:{}] {}", std::file!(), std::line!(), __err);
        Err(__err)
    }
  };

  ($cond:expr, $err:expr, $($fmt_args:tt)+) => {
    if $cond {
        Ok(())
    } else {
        std::eprintln!("[{}:{}] {}", std::file!(), std::line!(), std::format_args!($($fmt_args)+));
        Err($err)
    }
  };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ContainerError {
    EmptyContainer,
    IndexOutOfRange,
    InvalidPosition,
    StalePosition,
}

impl From<ContainerError> for &'static str {
    fn from(value: ContainerError) -> Self {
        match value {
            ContainerError::EmptyContainer => "Container has no elements",
            ContainerError::IndexOutOfRange => "Index must be in range from 0 to len()",
            ContainerError::InvalidPosition => "Position does not name a live element",
            ContainerError::StalePosition => {
                "Position was issued before the buffer was last rebuilt"
            }
        }
    }
}

impl core::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl std::error::Error for ContainerError {}

pub type ContainerResult<T> = Result<T, ContainerError>;
