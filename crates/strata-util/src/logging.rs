/// Logs a message at most once per call site and distinct message text.
///
/// Evaluates to `true` if the message was emitted by this invocation.
#[macro_export]
macro_rules! log_once {
    ($log:ident; $($arg:tt)*) => {{
        use std::collections::HashSet;
        $crate::re_exports::lazy_static! {
            static ref LOGGED: $crate::re_exports::parking_lot::RwLock<HashSet<String>> =
                $crate::re_exports::parking_lot::RwLock::new(HashSet::new());
        }
        let msg = format!($($arg)*);
        // the read guard must be released before taking the write lock
        let seen = LOGGED.read().contains(&msg);
        let first = !seen && LOGGED.write().insert(msg.clone());
        if first {
            $crate::re_exports::log::$log!("{}", msg);
        }
        first
    }};
}

#[macro_export]
macro_rules! debug_once {
    ($($arg:tt)*) => {
        $crate::log_once!(debug; $($arg)*)
    };
}
