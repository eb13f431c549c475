pub mod db;
pub mod process;
pub use process::on_message;

pub const ADD: &str = "addcom";
pub const EDIT: &str = "editcom";
pub const DELETE: &str = "delcom";
pub const LIST: &str = "customcommands";

pub const COMMANDS: [&str; 4] = [ADD, EDIT, DELETE, LIST];

pub const HELP: &str = "
### Custom commands
Custom commands answer a trigger word with a fixed reply
#### Make
##### Syntax
```text
!addcom NAME TEXT
```
##### Example
```text
!addcom greet Hello {author}!
```
#### Edit
```text
!editcom NAME TEXT
```
#### Remove
```text
!delcom NAME
```
#### List
```text
!customcommands
```
#### Placeholders
`{message}` `{author}` `{channel}` `{server}`, and attributes such as
`{author.mention}` `{author.id}` `{channel.name}` `{server.id}`";

pub const CREATED: &str = "**Custom command created**";
pub const EDITED: &str = "**Custom command edited**";
pub const DELETED: &str = "**Deleted successfully**";
pub const EXISTS: &str = "**That command already exists**";
pub const MULTI_WORD: &str = "**Custom commands cannot be made of several words**";
pub const NOT_FOUND: &str = "**That command does not exist**";
pub const EMPTY: &str = "**This server has no custom commands**";
pub const LIST_HEADER: &str = "Custom commands:";
