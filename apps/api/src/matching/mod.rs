// Matching pipeline: decode uploaded bytes, loop resumes strictly
// sequentially, hand each (JD, resume) pair to the inference client.
// All actual comparison happens in the model — nothing here scores anything.

pub mod batch;
pub mod decode;
pub mod handlers;
