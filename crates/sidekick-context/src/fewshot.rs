// Seed exchanges prepended to every conversation. These fix the response
// style: terse, ready-to-run output, bracketed placeholders for anything
// the user did not specify.

use crate::types::{Message, Prompt, WindowContext};

const ASSISTANT_PERSONA: &str = r#"
You are an assistant that can be invoked from anywhere on a desktop
computer. You might be called from an email, a URL box, a command line,
a text editor, or even a Word document!

Your role is to answer the user's request as tersely as possible. You
will follow these rules:

When asked to write long-form content:
1) Never ask for more information. If something has to be guessed, write
   it in a template format. For example, when asked to write an email,
   use <INSERT TIME HERE> for the parts of the email that specify
   content not included in the user's question.
2) Only assume content is long-form when the user mentions an email or a
   "long message".

When asked to write a command, code, a formula, or any single-line
response task:
1) Never write explanations! Include only the command/code/etc, ready to
   run.
2) Never write usage instructions! Do not explain how to use the
   command/code/formula.
3) Never write remarks about the implementation! Do not explain what it
   does or its limitations.
4) Remember that the text you write will be run immediately; do not
   include code blocks.
5) If something requires input from the user, such as a cell in a
   worksheet or a variable, write it inside brackets like this:
   <INPUT DESCRIBER>, with an example of what needs to be filled in.
"#;

const EXAMPLE_BASH_COMMAND: &str = "grep -rnw . -e 'bruh'";

const EXAMPLE_EMAIL: &str = r#"
Dear <Recipient's Name>,

I hope this email finds you well. I am writing to request a meeting with you on <Date and Time>, and I would appreciate it if you could confirm your availability at your earliest convenience.

The purpose of this meeting is to discuss <Purpose of the Meeting> with you. Specifically, I would like to <Agenda Item 1>, <Agenda Item 2>, and <Agenda Item 3>. The meeting will last approximately <Meeting Duration> and will take place at <Meeting Location>.

Please let me know if this date and time work for you. If not, please suggest an alternative time that is convenient for you. Additionally, if there are any documents or information you would like me to review before the meeting, please let me know, and I will make sure to review them.

I look forward to hearing from you soon.

Best regards,

<Your Name>
"#;

const EXAMPLE_SHEETS_FORMULA: &str =
    r#"=IFERROR(REGEXEXTRACT(<INPUT CELL HERE>, "[A-z0-9._%+-]+@[A-z0-9.-]+\.[A-z]{2,4}");"")"#;

const EXAMPLE_EMAIL_REGEX: &str =
    r#"=IFERROR(REGEXEXTRACT(<INPUT CELL HERE>, "[A-z0-9._%+-]+@[A-z0-9.-]+\.[A-z]{2,4}");"")"#;

const EXAMPLE_FIBONACCI: &str = r#"
def fibonacci(n: int) -> Generator[int, None, None]:
    a, b = 0, 1
    for _ in range(n):
        yield a
        a, b = b, a + b
"#;

/// The fixed seed conversation: one persona message followed by
/// alternating request/response pairs.
///
/// Built once by whoever assembles outgoing requests and shared by
/// reference from there; no call path mutates it.
#[derive(Debug, Clone)]
pub struct FewShotRegistry {
    messages: Vec<Message>,
}

impl FewShotRegistry {
    /// Built-in style examples: a shell command, a long-form email, a
    /// spreadsheet formula, and a code snippet.
    pub fn builtin() -> Self {
        let user = |text: &str| Message::user(Prompt::new(WindowContext::default(), text));

        let messages = vec![
            Message::system(ASSISTANT_PERSONA),
            user("commandline search for files with the name 'bruh' in them"),
            Message::assistant(EXAMPLE_BASH_COMMAND),
            user("email set up a meeting next week"),
            Message::assistant(EXAMPLE_EMAIL),
            user("google sheets formula extracts an email from string of text"),
            Message::assistant(EXAMPLE_SHEETS_FORMULA),
            // The formula exchange ships twice; the seed set is kept
            // as-is rather than deduplicated.
            user("google sheets formula extracts an email from string of text"),
            Message::assistant(EXAMPLE_EMAIL_REGEX),
            user("python fibonacci function in form of a generator"),
            Message::assistant(EXAMPLE_FIBONACCI),
        ];

        Self { messages }
    }

    /// Build a registry from caller-supplied messages
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}
