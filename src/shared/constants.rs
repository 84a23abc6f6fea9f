/// Reasons a respondent can pick on the survey form, in display order
pub const INTEREST_REASONS: [&str; 6] = [
    "이미 개발을 할 줄 아는데 AI를 잘 써보고싶어서",
    "이미 개발을 할 줄 아는데 풀스택 개발자가 되고싶어서",
    "포트폴리오를 만들고싶어서",
    "만들고싶은 아이디어가 있어서",
    "업무에 도움이 될 것 같아서",
    "뭐든 배워두면 좋을 것 같아서",
];

// =============================================================================
// FIELD RULES
// =============================================================================

pub const OCCUPATION_MIN_CHARS: usize = 2;

pub const DETAILED_REASON_MIN_CHARS: usize = 10;

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

pub const OCCUPATION_TOO_SHORT_MESSAGE: &str = "직군을 2글자 이상 입력해주세요";

pub const NO_REASON_SELECTED_MESSAGE: &str = "하나 이상의 이유를 선택해주세요";

pub const DETAILED_REASON_TOO_SHORT_MESSAGE: &str = "10글자 이상 작성해주세요";

pub const INVALID_EMAIL_MESSAGE: &str = "올바른 이메일 주소를 입력해주세요";

/// Returned by the submit endpoint whenever forwarding fails
pub const SUBMISSION_FAILED_MESSAGE: &str = "제출 중 오류가 발생했습니다.";

/// Shown to the respondent as a blocking alert when a submit attempt fails
pub const SUBMISSION_ALERT_MESSAGE: &str = "제출 중 오류가 발생했습니다. 다시 시도해주세요.";

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
