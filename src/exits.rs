//! Exit handling: signal handlers and core dump suppression.

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit with the conventional 130
#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(130) }
}

/// Install termination signal handlers. Call this early in main().
#[cfg(unix)]
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

/// Keep generated passwords out of core dumps and ptrace attaches.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    if rc != 0 {
        log::warn!("prctl(PR_SET_DUMPABLE) failed: {}", std::io::Error::last_os_error());
    }
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
