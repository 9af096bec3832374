/// Built-in article used when the caller sets `useDemo=true`.
pub const DEMO_DOCUMENT: &str = r#"# Introduction to Artificial Intelligence

Artificial Intelligence (AI) is a branch of computer science that aims to create systems capable of performing tasks that would typically require human intelligence. These tasks include learning, reasoning, problem-solving, perception, and language understanding.

## Key Areas of AI

1. **Machine Learning**: Algorithms that improve through experience
2. **Natural Language Processing**: Enabling computers to understand human language
3. **Computer Vision**: Allowing machines to interpret and make decisions based on visual input
4. **Robotics**: Creating machines that can perform physical tasks
5. **Expert Systems**: Programs designed to mimic human experts in specific domains

## Applications of AI

AI has transformed numerous industries, including:

- **Healthcare**: Disease diagnosis, drug discovery, and personalized treatment
- **Finance**: Fraud detection, algorithmic trading, and risk assessment
- **Transportation**: Self-driving vehicles and traffic optimization
- **Retail**: Recommendation systems and inventory management
- **Education**: Personalized learning and automated grading

## Ethical Considerations

The rapid advancement of AI raises important ethical questions:

- Privacy concerns with data collection
- Potential job displacement due to automation
- Algorithmic bias and fairness
- Safety and security risks
- Long-term impact on society

## Future Directions

As AI continues to evolve, researchers are exploring:

- General artificial intelligence that can perform any intellectual task
- Improved human-AI collaboration
- More transparent and explainable AI systems
- AI that can operate with limited computational resources
- Systems that combine multiple AI capabilities

The field of artificial intelligence remains one of the most dynamic and promising areas of technology, with the potential to solve complex problems and transform how we live and work."#;
