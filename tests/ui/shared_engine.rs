use sensitive_filter::{build_engine, Engine};
use std::{sync::Arc, thread};

fn assert_send_sync<T: Send + Sync>(_: &T) {}

fn main() {
    let engine: Arc<Engine> = Arc::new(build_engine(&["bad"], &["good bad"]));
    assert_send_sync(&*engine);

    let handle = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || engine.filter("bad").into_owned())
    };

    assert_eq!(handle.join().unwrap(), "~~~");
}
