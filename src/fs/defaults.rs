//! Default filesystem layout populated at startup.

use super::path;
use super::types::VfsError;
use super::vfs::VirtualFileSystem;

const HOME_DIRS: &[&str] = &["documents", "downloads", "pictures", "music", "desktop"];

const WELCOME: &str = "Welcome to TermOS!\n\n\
This is your home directory.\n\
You can create, edit, and delete files here.\n\n\
Try these commands:\n  \
ls - List files\n  \
pwd - Show current directory\n  \
cd [dir] - Change directory\n  \
cat [file] - View file contents\n";

const TODO: &str = "# TODO List\n\n\
## System Tasks\n\
- [ ] Add more applications\n\
- [ ] Implement package manager\n\
- [ ] Add networking capabilities\n\
- [ ] Create developer tools\n\n\
## Personal Tasks\n\
- [ ] Learn shell scripting\n\
- [ ] Customize terminal theme\n\
- [ ] Organize files\n";

/// Populate `vfs` with the standard tree for `home` and leave the working
/// directory there.
pub fn populate(vfs: &mut VirtualFileSystem, home: &str, hostname: &str) -> Result<(), VfsError> {
    vfs.mkdir_all(home)?;
    for dir in HOME_DIRS {
        vfs.mkdir_all(&path::join(home, dir))?;
    }

    vfs.write_file(&path::join(home, "welcome.txt"), WELCOME)?;
    vfs.write_file(&path::join(home, "todo.md"), TODO)?;

    let config = serde_json::json!({
        "theme": "dark",
        "editor": { "fontSize": 14, "wordWrap": true },
        "terminal": { "font": "JetBrains Mono", "fontSize": 13, "opacity": 0.95 },
    });
    vfs.write_file(&path::join(home, ".config.json"), &serde_json::to_string_pretty(&config)?)?;

    vfs.mkdir_all("/bin")?;
    vfs.write_file("/bin/hello", "#!/bin/tsh\necho \"Hello from TermOS!\"")?;
    vfs.set_permissions("/bin/hello", "rwxr-xr-x")?;

    vfs.mkdir_all("/etc")?;
    vfs.write_file("/etc/hostname", hostname)?;
    vfs.write_file("/etc/motd", "Welcome to TermOS v0.1.0")?;

    vfs.mkdir_all("/tmp")?;
    vfs.cd(home)?;
    Ok(())
}
