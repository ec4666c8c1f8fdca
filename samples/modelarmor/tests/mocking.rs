// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Run the samples against a mocked service.

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::response::Response;
    use google_cloud_gax as gax;
    use google_cloud_modelarmor_v1 as modelarmor;
    use google_cloud_wkt as wkt;
    use modelarmor::model::*;
    use modelarmor_samples::*;
    use std::collections::HashMap;

    type TestResult = anyhow::Result<()>;

    const PROJECT_ID: &str = "test-project";
    const LOCATION_ID: &str = "us-central1";
    const TEMPLATE_ID: &str = "test-template";
    const PARENT: &str = "projects/test-project/locations/us-central1";
    const TEMPLATE_NAME: &str = "projects/test-project/locations/us-central1/templates/test-template";

    mockall::mock! {
        #[derive(Debug)]
        ModelArmor {}
        impl modelarmor::stub::ModelArmor for ModelArmor {
            async fn list_templates(&self, req: ListTemplatesRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ListTemplatesResponse>>;
            async fn get_template(&self, req: GetTemplateRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Template>>;
            async fn create_template(&self, req: CreateTemplateRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Template>>;
            async fn update_template(&self, req: UpdateTemplateRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Template>>;
            async fn delete_template(&self, req: DeleteTemplateRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<()>>;
            async fn get_floor_setting(&self, req: GetFloorSettingRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<FloorSetting>>;
            async fn update_floor_setting(&self, req: UpdateFloorSettingRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<FloorSetting>>;
            async fn sanitize_user_prompt(&self, req: SanitizeUserPromptRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<SanitizeUserPromptResponse>>;
            async fn sanitize_model_response(&self, req: SanitizeModelResponseRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<SanitizeModelResponseResponse>>;
        }
    }

    fn service_error(code: Code) -> Error {
        Error::service(Status::default().set_code(code).set_message("test-only"))
    }

    fn echo_template(
        req: Option<Template>,
        name: &str,
    ) -> gax::Result<Response<Template>> {
        let template = req.unwrap_or_default().set_name(name);
        Ok(Response::from(template))
    }

    fn template_from_create(req: CreateTemplateRequest) -> gax::Result<Response<Template>> {
        let name = format!("{}/templates/{}", req.parent, req.template_id);
        echo_template(req.template, &name)
    }

    fn rai_filters(config: Option<&FilterConfig>) -> Vec<RaiFilterType> {
        config
            .and_then(|c| c.rai_settings.as_ref())
            .map(|s| s.rai_filters.iter().map(|f| f.filter_type.clone()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn create_template() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_create_template()
            .withf(|r, _| {
                let pi = r
                    .template
                    .as_ref()
                    .and_then(|t| t.filter_config.as_ref())
                    .and_then(|c| c.pi_and_jailbreak_filter_settings.as_ref());
                let uri = r
                    .template
                    .as_ref()
                    .and_then(|t| t.filter_config.as_ref())
                    .and_then(|c| c.malicious_uri_filter_settings.as_ref());
                r.parent == PARENT
                    && r.template_id == TEMPLATE_ID
                    && pi.is_some_and(|s| {
                        s.filter_enforcement
                            == pi_and_jailbreak_filter_settings::PiAndJailbreakFilterEnforcement::Enabled
                    })
                    && uri.is_some_and(|s| {
                        s.filter_enforcement
                            == malicious_uri_filter_settings::MaliciousUriFilterEnforcement::Enabled
                    })
            })
            .return_once(|r, _| template_from_create(r));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let got =
            create_template::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID).await?;
        assert_eq!(got.name, TEMPLATE_NAME);
        let output = String::from_utf8(buf)?;
        assert!(
            output.contains(&format!("Created template: {TEMPLATE_NAME}")),
            "{output}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_template_with_labels() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_create_template()
            .withf(|r, _| {
                let labels = r.template.as_ref().map(|t| &t.labels);
                labels.is_some_and(|l| l.get("key1").map(String::as_str) == Some("value1"))
                    && rai_filters(r.template.as_ref().and_then(|t| t.filter_config.as_ref()))
                        == vec![RaiFilterType::HateSpeech, RaiFilterType::SexuallyExplicit]
            })
            .return_once(|r, _| template_from_create(r));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let labels = HashMap::from([("key1".to_string(), "value1".to_string())]);
        let got = create_template_with_labels::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
            labels,
        )
        .await?;
        assert_eq!(got.labels.get("key1").map(String::as_str), Some("value1"));
        let output = String::from_utf8(buf)?;
        assert!(output.contains("Created template: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn create_template_with_metadata() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_create_template()
            .withf(|r, _| {
                r.template
                    .as_ref()
                    .and_then(|t| t.template_metadata.as_ref())
                    .is_some_and(|m| {
                        m.ignore_partial_invocation_failures && m.log_sanitize_operations
                    })
            })
            .return_once(|r, _| template_from_create(r));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        create_template_with_metadata::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID)
            .await?;
        let output = String::from_utf8(buf)?;
        assert!(
            output.contains(&format!("Created Model Armor Template: {TEMPLATE_NAME}")),
            "{output}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_template_with_basic_sdp() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_create_template()
            .withf(|r, _| {
                let config = r.template.as_ref().and_then(|t| t.filter_config.as_ref());
                let pi = config.and_then(|c| c.pi_and_jailbreak_filter_settings.as_ref());
                let uri = config.and_then(|c| c.malicious_uri_filter_settings.as_ref());
                rai_filters(config)
                    == vec![RaiFilterType::HateSpeech, RaiFilterType::SexuallyExplicit]
                    && pi.is_some_and(|s| {
                        s.filter_enforcement
                            == pi_and_jailbreak_filter_settings::PiAndJailbreakFilterEnforcement::Enabled
                    })
                    && uri.is_some_and(|s| {
                        s.filter_enforcement
                            == malicious_uri_filter_settings::MaliciousUriFilterEnforcement::Enabled
                    })
                    && config
                        .and_then(|c| c.sdp_settings.as_ref())
                        .is_some_and(|s| s.basic_config().is_some())
            })
            .return_once(|r, _| template_from_create(r));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        create_template_with_basic_sdp::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID)
            .await?;
        let output = String::from_utf8(buf)?;
        assert!(output.contains("Created template with basic SDP: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn create_template_already_exists() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_create_template()
            .return_once(|_, _| Err(service_error(Code::AlreadyExists)));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let err = create_template::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID)
            .await
            .expect_err("the service error should be returned");
        assert_eq!(err.to_string(), "failed to create template");
        let source = err.downcast_ref::<Error>();
        assert_eq!(
            source.and_then(|e| e.status()).map(|s| s.code),
            Some(Code::AlreadyExists),
            "{err:?}"
        );
        assert!(buf.is_empty(), "{buf:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_template() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_get_template()
            .withf(|r, _| r.name == TEMPLATE_NAME)
            .return_once(|r, _| Ok(Response::from(Template::new().set_name(r.name))));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let got =
            get_template::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID).await?;
        assert_eq!(got.name, TEMPLATE_NAME);
        let output = String::from_utf8(buf)?;
        assert!(output.contains("Retrieved template: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn get_template_not_found() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_get_template()
            .return_once(|_, _| Err(service_error(Code::NotFound)));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let err = get_template::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID)
            .await
            .expect_err("the service error should be returned");
        assert_eq!(err.to_string(), "failed to get template");
        Ok(())
    }

    #[tokio::test]
    async fn list_templates() -> TestResult {
        let mut mock = MockModelArmor::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_templates()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == PARENT && r.page_token.is_empty())
            .return_once(|_, _| {
                Ok(Response::from(
                    ListTemplatesResponse::new()
                        .set_next_page_token("page-001")
                        .set_templates(make_templates(0, 2)),
                ))
            });
        mock.expect_list_templates()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == PARENT && r.page_token == "page-001")
            .return_once(|_, _| {
                Ok(Response::from(
                    ListTemplatesResponse::new().set_templates(make_templates(2, 1)),
                ))
            });

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let got = list_templates::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID).await?;
        assert_eq!(got, make_templates(0, 3));
        let output = String::from_utf8(buf)?;
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                format!("Template: {PARENT}/templates/template-0"),
                format!("Template: {PARENT}/templates/template-1"),
                format!("Template: {PARENT}/templates/template-2"),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_templates_error() -> TestResult {
        let mut mock = MockModelArmor::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_templates()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(Response::from(
                    ListTemplatesResponse::new()
                        .set_next_page_token("page-001")
                        .set_templates(make_templates(0, 1)),
                ))
            });
        mock.expect_list_templates()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Err(service_error(Code::PermissionDenied)));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let err = list_templates::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID)
            .await
            .expect_err("the service error should be returned");
        assert_eq!(err.to_string(), "failed to iterate templates");
        let output = String::from_utf8(buf)?;
        assert!(output.contains("Template: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn list_templates_with_filter() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_list_templates()
            .withf(|r, _| {
                r.parent == PARENT && r.filter == format!(r#"name="{TEMPLATE_NAME}""#)
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    ListTemplatesResponse::new()
                        .set_templates([Template::new().set_name(TEMPLATE_NAME)]),
                ))
            });

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let got = list_templates_with_filter::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
        )
        .await?;
        assert_eq!(got, vec![TEMPLATE_NAME.to_string()]);
        let output = String::from_utf8(buf)?;
        assert_eq!(output, format!("Templates Found: {TEMPLATE_NAME}\n"));
        Ok(())
    }

    #[tokio::test]
    async fn list_templates_with_filter_no_match() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_list_templates()
            .return_once(|_, _| Ok(Response::from(ListTemplatesResponse::new())));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let got = list_templates_with_filter::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
        )
        .await?;
        assert!(got.is_empty(), "{got:?}");
        assert_eq!(String::from_utf8(buf)?, "Templates Found: \n");
        Ok(())
    }

    #[tokio::test]
    async fn update_template() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_update_template()
            .withf(|r, _| {
                r.update_mask.is_none()
                    && r.template.as_ref().is_some_and(|t| {
                        t.name == TEMPLATE_NAME
                            && t.filter_config
                                .as_ref()
                                .and_then(|c| c.pi_and_jailbreak_filter_settings.as_ref())
                                .is_some_and(|s| {
                                    s.confidence_level == DetectionConfidenceLevel::LowAndAbove
                                })
                    })
            })
            .return_once(|r, _| echo_template(r.template, TEMPLATE_NAME));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        update_template::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID).await?;
        let output = String::from_utf8(buf)?;
        assert!(
            output.contains(&format!("Updated Model Armor Template: {TEMPLATE_NAME}")),
            "{output}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_template_labels() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_update_template()
            .withf(|r, _| {
                r.update_mask
                    .as_ref()
                    .is_some_and(|m| m.paths == vec!["labels".to_string()])
                    && r.template.as_ref().is_some_and(|t| {
                        t.name == TEMPLATE_NAME
                            && t.labels.get("env").map(String::as_str) == Some("test")
                    })
            })
            .return_once(|r, _| echo_template(r.template, TEMPLATE_NAME));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let labels = HashMap::from([("env".to_string(), "test".to_string())]);
        let got = update_template_labels::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
            labels,
        )
        .await?;
        assert_eq!(got.labels.get("env").map(String::as_str), Some("test"));
        let output = String::from_utf8(buf)?;
        assert!(
            output.contains("Updated Model Armor Template Labels: "),
            "{output}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_template_metadata() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_update_template()
            .withf(|r, _| {
                r.update_mask
                    .as_ref()
                    .is_some_and(|m| m.paths == vec!["template_metadata".to_string()])
                    && r.template
                        .as_ref()
                        .and_then(|t| t.template_metadata.as_ref())
                        .is_some_and(|m| m.log_template_operations && m.log_sanitize_operations)
            })
            .return_once(|r, _| echo_template(r.template, TEMPLATE_NAME));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        update_template_metadata::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID)
            .await?;
        let output = String::from_utf8(buf)?;
        assert!(
            output.contains("Updated Model Armor Template Metadata: "),
            "{output}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_template() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_delete_template()
            .withf(|r, _| r.name == TEMPLATE_NAME)
            .return_once(|_, _| Ok(Response::from(())));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        delete_template::sample(&mut buf, &client, PROJECT_ID, LOCATION_ID, TEMPLATE_ID).await?;
        let output = String::from_utf8(buf)?;
        assert_eq!(
            output,
            format!("Successfully deleted Model Armor template: {TEMPLATE_NAME}\n")
        );
        Ok(())
    }

    fn match_found() -> SanitizationResult {
        SanitizationResult::new().set_filter_match_state(FilterMatchState::MatchFound)
    }

    #[tokio::test]
    async fn sanitize_user_prompt() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_sanitize_user_prompt()
            .withf(|r, _| {
                r.name == TEMPLATE_NAME
                    && r.user_prompt_data
                        .as_ref()
                        .and_then(|d| d.text())
                        .is_some_and(|t| t == "How do I make a cake?")
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    SanitizeUserPromptResponse::new().set_sanitization_result(match_found()),
                ))
            });

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let got = sanitize_user_prompt::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
            "How do I make a cake?",
        )
        .await?;
        assert_eq!(
            got.sanitization_result.map(|r| r.filter_match_state),
            Some(FilterMatchState::MatchFound)
        );
        let output = String::from_utf8(buf)?;
        assert!(output.starts_with("Sanitization Result: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn sanitize_model_response() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_sanitize_model_response()
            .withf(|r, _| {
                r.name == TEMPLATE_NAME
                    && r.model_response_data
                        .as_ref()
                        .and_then(|d| d.text())
                        .is_some_and(|t| t == "Here is a recipe.")
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    SanitizeModelResponseResponse::new().set_sanitization_result(match_found()),
                ))
            });

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        sanitize_model_response::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
            "Here is a recipe.",
        )
        .await?;
        let output = String::from_utf8(buf)?;
        assert!(output.starts_with("Sanitization Result: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn screen_pdf_file() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_sanitize_user_prompt()
            .withf(|r, _| {
                r.name == TEMPLATE_NAME
                    && r.user_prompt_data
                        .as_ref()
                        .and_then(|d| d.byte_item())
                        .is_some_and(|b| {
                            b.byte_data_type == byte_data_item::ByteItemType::Pdf
                                && b.byte_data.starts_with(b"%PDF-")
                        })
            })
            .return_once(|_, _| Ok(Response::from(SanitizeUserPromptResponse::new())));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        screen_pdf_file::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
            SAMPLE_PDF_BASE64,
        )
        .await?;
        let output = String::from_utf8(buf)?;
        assert!(
            output.starts_with("PDF screening sanitization result: "),
            "{output}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn screen_pdf_file_invalid_content() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_sanitize_user_prompt().never();

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let err = screen_pdf_file::sample(
            &mut buf,
            &client,
            PROJECT_ID,
            LOCATION_ID,
            TEMPLATE_ID,
            "not base64!",
        )
        .await
        .expect_err("invalid base64 should be rejected");
        assert_eq!(err.to_string(), "invalid base64 PDF content");
        Ok(())
    }

    #[tokio::test]
    async fn get_floor_settings() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_get_floor_setting()
            .withf(|r, _| r.name == "folders/123/locations/global/floorSetting")
            .return_once(|r, _| {
                Ok(Response::from(
                    FloorSetting::new()
                        .set_name(r.name)
                        .set_enable_floor_setting_enforcement(true),
                ))
            });

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        let parent = FloorSettingParent::Folder("123".to_string());
        let got = get_floor_settings::sample(&mut buf, &client, &parent).await?;
        assert_eq!(got.enable_floor_setting_enforcement, Some(true));
        let output = String::from_utf8(buf)?;
        assert!(output.starts_with("Retrieved floor setting: "), "{output}");
        Ok(())
    }

    fn expect_floor_setting_update(mock: &mut MockModelArmor, name: &'static str) {
        mock.expect_update_floor_setting()
            .withf(move |r, _| {
                r.floor_setting.as_ref().is_some_and(|f| {
                    f.name == name
                        && f.enable_floor_setting_enforcement == Some(true)
                        && rai_filters(f.filter_config.as_ref()) == vec![RaiFilterType::HateSpeech]
                })
            })
            .return_once(|r, _| Ok(Response::from(r.floor_setting.unwrap_or_default())));
    }

    #[tokio::test]
    async fn update_folder_floor_settings() -> TestResult {
        let mut mock = MockModelArmor::new();
        expect_floor_setting_update(&mut mock, "folders/123/locations/global/floorSetting");

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        update_folder_floor_settings::sample(&mut buf, &client, "123").await?;
        let output = String::from_utf8(buf)?;
        assert!(output.starts_with("Updated Floor Setting: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn update_project_floor_settings() -> TestResult {
        let mut mock = MockModelArmor::new();
        expect_floor_setting_update(
            &mut mock,
            "projects/test-project/locations/global/floorSetting",
        );

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        update_project_floor_settings::sample(&mut buf, &client, PROJECT_ID).await?;
        let output = String::from_utf8(buf)?;
        assert!(output.starts_with("Updated Floor Setting: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn update_organization_floor_settings() -> TestResult {
        let mut mock = MockModelArmor::new();
        expect_floor_setting_update(&mut mock, "organizations/456/locations/global/floorSetting");

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let mut buf = Vec::new();
        update_organization_floor_settings::sample(&mut buf, &client, "456").await?;
        let output = String::from_utf8(buf)?;
        assert!(output.starts_with("Updated Floor Setting: "), "{output}");
        Ok(())
    }

    #[tokio::test]
    async fn cleanup_template_ignores_not_found() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_delete_template()
            .withf(|r, _| r.name == TEMPLATE_NAME)
            .return_once(|_, _| Err(service_error(Code::NotFound)));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        cleanup_template(&client, TEMPLATE_NAME).await?;
        Ok(())
    }

    #[tokio::test]
    async fn cleanup_template_reports_other_errors() -> TestResult {
        let mut mock = MockModelArmor::new();
        mock.expect_delete_template()
            .return_once(|_, _| Err(service_error(Code::PermissionDenied)));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        let got = cleanup_template(&client, TEMPLATE_NAME).await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn cleanup_stale_templates_only_deletes_old_test_templates() -> TestResult {
        use samples_test_utils::resource_names::PREFIX;
        let stale = format!("{PARENT}/templates/{PREFIX}stale");
        let fresh = format!("{PARENT}/templates/{PREFIX}fresh");
        let other = format!("{PARENT}/templates/production");
        let now = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH)?;
        let templates = vec![
            Template::new()
                .set_name(&stale)
                .set_create_time(wkt::Timestamp::clamp(0, 0)),
            Template::new()
                .set_name(&fresh)
                .set_create_time(wkt::Timestamp::clamp(now.as_secs() as i64, 0)),
            Template::new()
                .set_name(&other)
                .set_create_time(wkt::Timestamp::clamp(0, 0)),
        ];

        let mut mock = MockModelArmor::new();
        mock.expect_list_templates().return_once(move |_, _| {
            Ok(Response::from(
                ListTemplatesResponse::new().set_templates(templates),
            ))
        });
        mock.expect_delete_template()
            .once()
            .withf(move |r, _| r.name == stale)
            .return_once(|_, _| Ok(Response::from(())));

        let client = modelarmor::client::ModelArmor::from_stub(mock);
        cleanup_stale_templates(&client, PROJECT_ID, LOCATION_ID).await?;
        Ok(())
    }

    fn make_templates(start: usize, count: usize) -> Vec<Template> {
        (start..(start + count))
            .map(|i| Template::new().set_name(format!("{PARENT}/templates/template-{i}")))
            .collect()
    }
}
