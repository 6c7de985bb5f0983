use aws_sdk_cloudformation::model::{Parameter, StackStatus, StackSummary};
use aws_types::region::Region;

/// The single parameter every stack is created/updated with.
const BUCKET_NAME_PARAMETER_KEY: &str = "BucketNameParam";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Service error ocurred: {0}.")]
    ServiceError(String),

    #[error("Unknown error ocurred: {0}.")]
    UnknownError(String),
}

/// What the reconciliation loop should do for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

/// The stack is only deleted when it is there to delete; a delete run
/// against a region without the stack recreates it.
pub fn decide(exists: bool, delete_requested: bool) -> Action {
    if !exists {
        return Action::Create;
    }

    if delete_requested {
        return Action::Delete;
    }

    return Action::Update;
}

pub fn qualified_name(region: &str, stack_name: &str) -> String {
    return format!("{}-{}", region, stack_name);
}

pub struct Stack {
    pub qualified_name: String,

    client: aws_sdk_cloudformation::Client,
}

impl Stack {
    pub async fn new(region: &str, stack_name: &str) -> Self {
        let qualified_name = qualified_name(region, stack_name);

        let sdk_config = aws_config::from_env()
            .region(Region::new(region.to_string()))
            .load()
            .await;
        let client = aws_sdk_cloudformation::Client::new(&sdk_config);

        return Self {
            qualified_name,
            client,
        };
    }

    /// Whether a live stack with this qualified name is visible to the
    /// regional client. Walks every `ListStacks` page.
    pub async fn exists(&self) -> Result<bool, Error> {
        let mut next_token: Option<String> = None;

        loop {
            let result = self
                .client
                .list_stacks()
                .set_next_token(next_token.take())
                .send()
                .await;

            let page = match result {
                Ok(data) => data,
                Err(aws_sdk_cloudformation::types::SdkError::ServiceError { err, .. }) => {
                    return Err(Error::ServiceError(err.to_string()));
                }
                Err(err) => return Err(Error::UnknownError(err.to_string())),
            };

            let summaries = page.stack_summaries().unwrap_or_else(|| &[]);
            if has_live_stack(summaries, &self.qualified_name) {
                return Ok(true);
            }

            next_token = page.next_token().map(String::from);
            if next_token.is_none() {
                return Ok(false);
            }
        }
    }

    pub async fn create(&self, template_body: &str, bucket_name: &str) -> Result<(), Error> {
        tracing::info!("Creating stack: {}", self.qualified_name);

        let result = self
            .client
            .create_stack()
            .stack_name(&self.qualified_name)
            .template_body(template_body)
            .parameters(bucket_name_parameter(bucket_name))
            .send()
            .await;

        let response = match result {
            Ok(data) => data,
            Err(aws_sdk_cloudformation::types::SdkError::ServiceError { err, .. }) => {
                return Err(Error::ServiceError(err.to_string()));
            }
            Err(err) => return Err(Error::UnknownError(err.to_string())),
        };
        println!("{:?}", response);

        return Ok(());
    }

    pub async fn update(&self, template_body: &str, bucket_name: &str) -> Result<(), Error> {
        tracing::info!("Updating stack: {}", self.qualified_name);

        let result = self
            .client
            .update_stack()
            .stack_name(&self.qualified_name)
            .template_body(template_body)
            .parameters(bucket_name_parameter(bucket_name))
            .send()
            .await;

        let response = match result {
            Ok(data) => data,
            Err(aws_sdk_cloudformation::types::SdkError::ServiceError { err, .. }) => {
                return Err(Error::ServiceError(err.to_string()));
            }
            Err(err) => return Err(Error::UnknownError(err.to_string())),
        };
        println!("{:?}", response);

        return Ok(());
    }

    pub async fn delete(&self) -> Result<(), Error> {
        tracing::info!("Deleting stack: {}", self.qualified_name);

        let result = self
            .client
            .delete_stack()
            .stack_name(&self.qualified_name)
            .send()
            .await;

        let response = match result {
            Ok(data) => data,
            Err(aws_sdk_cloudformation::types::SdkError::ServiceError { err, .. }) => {
                return Err(Error::ServiceError(err.to_string()));
            }
            Err(err) => return Err(Error::UnknownError(err.to_string())),
        };
        println!("{:?}", response);

        return Ok(());
    }
}

fn bucket_name_parameter(bucket_name: &str) -> Parameter {
    return Parameter::builder()
        .parameter_key(BUCKET_NAME_PARAMETER_KEY)
        .parameter_value(bucket_name)
        .build();
}

/// An exact, case-sensitive name match against every summary that is not
/// `DELETE_COMPLETE`. A deleted stack of the same name counts as absent so
/// it can be recreated.
fn has_live_stack(summaries: &[StackSummary], qualified_name: &str) -> bool {
    for summary in summaries {
        if summary.stack_status() == Some(&StackStatus::DeleteComplete) {
            continue;
        }

        if summary.stack_name() == Some(qualified_name) {
            return true;
        }
    }

    return false;
}
