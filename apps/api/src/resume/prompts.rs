/// Resume extraction prompt. `{resume_text}` is replaced with the extracted PDF text.
pub const RESUME_PARSE_PROMPT: &str = r#"
You are an expert Career Analyst and Resume Parser. Your task is to extract and synthesize information from the provided resume text into a clean JSON object.
{json_only}

Extraction & Generation Rules:
- full_name: The candidate's full name. (Extract)
- email: The candidate's primary email address. (Extract)
- job_role: Analyze the entire resume (experience, projects, skills) and GENERATE a concise, professional job title that best represents this person's expertise. For example, if they have ML projects and Python skills, "Machine Learning Engineer" is a good title, even if their last role was "Intern".
- bio: A professional summary or objective (max 3 sentences). If no summary exists, GENERATE one based on the content.
- skills: A comma-separated string of all technical skills. (Extract)
- experience: A short summary of total experience (e.g., "5 Years" or "Intern"). (Extract)
- education: A summary of their degree and university. (Extract)
- projects: An array of JSON objects. For each project found, create an object with:
  - "title": The exact project title.
  - "summary": A detailed summary of the project's description and achievements (3-3.5 sentences).

Resume Text:
---
{resume_text}
---
JSON Output:"#;
