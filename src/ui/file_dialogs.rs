use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Native "choose save location" dialog filtered to text files. Returns
/// None when the user cancels.
pub fn native_save_dialog() -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter("*.txt");
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
