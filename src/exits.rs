//! Process hardening and terminal restore on termination signals.

/// Leave the alternate screen, show the cursor, and restore cooked mode.
/// Only async-signal-safe calls.
fn restore_terminal() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            const SEQ: &[u8] = b"\x1b[0m\x1b[?1049l\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                SEQ.as_ptr() as *const libc::c_void,
                SEQ.len(),
            );
        }
    }
}

extern "C" fn on_terminate(sig: libc::c_int) {
    restore_terminal();
    unsafe { libc::_exit(128 + sig) }
}

/// Restore the terminal on SIGTERM/SIGHUP. Ctrl+C arrives as a key event
/// while the form holds raw mode, and as SIGINT otherwise.
pub fn install_handlers() {
    for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
        unsafe {
            libc::signal(sig, on_terminate as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        if libc::prctl(libc::PR_SET_DUMPABLE, 0) != 0 {
            log::debug!("prctl(PR_SET_DUMPABLE) failed");
        }
    }
}
