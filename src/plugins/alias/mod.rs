pub mod db;
pub mod process;
pub use process::on_message;

pub const COMMAND: &str = "alias";

pub const HELP: &str = "
### Aliases
Aliases are short words that run a longer command
#### Make
##### Syntax
```text
!alias add NAME COMMAND
```
##### Example
```text
!alias add test flip @Bob
```
#### Use
```text
!test
```
#### Show
```text
!alias show NAME
```
#### Help for the aliased command
```text
!alias help NAME
```
#### Remove
```text
!alias del NAME
```
#### List
```text
!alias list
```";

pub const MULTI_WORD: &str = "**Aliases cannot be made of several words**";
pub const EXISTS: &str = "**A command with that name already exists**";
pub const NOT_FOUND: &str = "**That alias does not exist**";
pub const EMPTY: &str = "**There are no aliases on this server**";
pub const LIST_HEADER: &str = "Aliases:";

pub fn added(name: &str) -> String {
    format!("**Alias '{name}' added**")
}

pub fn bot_command(name: &str) -> String {
    format!("**Cannot add '{name}', it is a bot command**")
}

pub fn deleted(name: &str) -> String {
    format!("**Alias '{name}' deleted**")
}
